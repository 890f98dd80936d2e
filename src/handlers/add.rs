//! Add handler for checklist MCP server

use crate::ChecklistServerHandler;
use crate::checklist::AddOutcome;
use mcp_attr::{Result as McpResult, bail_public};

impl ChecklistServerHandler {
    /// Appends an item. A case-insensitive duplicate is reported instead of added
    /// unless `force` is set, which is how the client confirms the duplicate.
    pub async fn handle_add(&self, text: String, force: Option<bool>) -> McpResult<String> {
        let force = force.unwrap_or(false);
        let mut model = self.model();

        let result = if force {
            model.add_forced(&text).map(AddOutcome::Added)
        } else {
            model.add(&text)
        };
        let status = model.status();
        drop(model);

        let text = text.trim();
        match result {
            Ok(AddOutcome::Added(added)) => Ok(format!(
                "Added \"{}\" at index {}\n{}",
                text, added.index, status
            )),
            Ok(AddOutcome::Duplicate { existing }) => {
                log::info!("event=item_add status=duplicate existing={:?}", existing);
                Ok(format!(
                    "Duplicate: \"{}\" is already in the list. Nothing was added. \
                     Call add again with force=true to add \"{}\" anyway.",
                    existing, text
                ))
            }
            Err(e) => {
                bail_public!(_, "{}", e);
            }
        }
    }
}
