//! Toggle handler for checklist MCP server

use crate::ChecklistServerHandler;
use mcp_attr::{Result as McpResult, bail_public};

impl ChecklistServerHandler {
    /// Flips the done flag of the item at `index`.
    pub async fn handle_toggle(&self, index: usize) -> McpResult<String> {
        let mut model = self.model();

        let done = match model.toggle(index) {
            Ok(done) => done,
            Err(e) => {
                drop(model);
                bail_public!(_, "{}", e);
            }
        };
        let text = model
            .get(index)
            .map(|item| item.text().to_string())
            .unwrap_or_default();
        let status = model.status();
        drop(model);

        Ok(format!(
            "Item {} \"{}\" marked as {}\n{}",
            index,
            text,
            if done { "done" } else { "not done" },
            status
        ))
    }
}
