//! Clear handler for checklist MCP server

use crate::ChecklistServerHandler;
use mcp_attr::{Result as McpResult, bail_public};

impl ChecklistServerHandler {
    /// Removes every item from the list.
    pub async fn handle_clear(&self) -> McpResult<String> {
        let mut model = self.model();
        let result = model.clear();
        drop(model);

        match result {
            Ok(removed) => Ok(format!("Cleared {} item(s) from the list", removed)),
            Err(e) => {
                bail_public!(_, "{}", e);
            }
        }
    }
}
