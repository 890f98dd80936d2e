//! Save handler for checklist MCP server

use crate::ChecklistServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl ChecklistServerHandler {
    /// Writes the current list to `path`, or to the default file when no path
    /// is given.
    pub async fn handle_save(&self, path: Option<String>) -> McpResult<String> {
        let path = validation::resolve_save_path(path.as_deref(), self.storage.file_path());
        let items = self.snapshot();

        if let Err(e) = self.storage.write_to(&path, &items) {
            log::error!("event=list_save status=error path={} error={:#}", path.display(), e);
            bail_public!(_, "Failed to save: {:#}", e);
        }

        Ok(format!(
            "List saved to {} ({} item(s))",
            path.display(),
            items.len()
        ))
    }
}
