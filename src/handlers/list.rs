//! List and status handlers for checklist MCP server

use crate::ChecklistServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl ChecklistServerHandler {
    /// Renders every item with its position, followed by the status line.
    pub async fn handle_list(&self) -> McpResult<String> {
        let model = self.model();
        let items = model.snapshot();
        let status = model.status();
        drop(model);

        Ok(formatting::format_list(&items, &status))
    }

    /// Reports item count, done count and completion percentage.
    pub async fn handle_status(&self) -> McpResult<String> {
        Ok(self.current_status().to_string())
    }
}
