//! Delete handler for checklist MCP server

use crate::ChecklistServerHandler;
use mcp_attr::{Result as McpResult, bail_public};
use std::collections::BTreeSet;

impl ChecklistServerHandler {
    /// Removes the items at the given positions. Positions past the end are
    /// ignored and reported; repeated positions count once.
    pub async fn handle_delete(&self, indices: Vec<usize>) -> McpResult<String> {
        let requested: BTreeSet<usize> = indices.into_iter().collect();
        let mut model = self.model();

        let removed = match model.delete_at(requested.iter().copied()) {
            Ok(removed) => removed,
            Err(e) => {
                drop(model);
                bail_public!(_, "{}", e);
            }
        };
        let status = model.status();
        drop(model);

        let ignored = requested.len() - removed;
        let mut result = format!("Deleted {} item(s)", removed);
        if ignored > 0 {
            result.push_str(&format!(
                " ({} position(s) out of range were ignored)",
                ignored
            ));
        }
        result.push('\n');
        result.push_str(&status.to_string());
        Ok(result)
    }
}
