//! Open handler for checklist MCP server

use crate::ChecklistServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl ChecklistServerHandler {
    /// Replaces the current list with the document at `path` (or the default
    /// file). An unreadable or invalid document leaves the list unchanged.
    pub async fn handle_open(&self, path: Option<String>) -> McpResult<String> {
        let path = validation::resolve_path(path.as_deref(), self.storage.file_path());

        // Decode fully before touching the model
        let decoded = match self.storage.read_from(&path) {
            Ok(decoded) => decoded,
            Err(e) => {
                log::error!("event=list_open status=error path={} error={:#}", path.display(), e);
                bail_public!(_, "Failed to open: {:#}", e);
            }
        };

        let count = decoded.items.len();
        let mut model = self.model();
        model.replace_all(decoded.items);
        let status = model.status();
        drop(model);

        Ok(format!(
            "Opened {} item(s) from {}\n{}",
            count,
            path.display(),
            status
        ))
    }
}
