//! Formatting helper functions for checklist MCP server
//!
//! Renders the list as text: one row per item with its position, a check
//! mark when done, and a trailing status line.

use crate::checklist::{Item, Status};

const DONE_MARK: &str = "✔";

/// Format one row: `[index] [✔] text`
pub fn format_item(index: usize, item: &Item) -> String {
    let mark = if item.is_done() { DONE_MARK } else { " " };
    format!("[{}] [{}] {}", index, mark, item.text())
}

/// Format the whole list followed by its status line
///
/// # Arguments
/// * `items` - Items in list order
/// * `status` - Status computed for the same items
pub fn format_list(items: &[Item], status: &Status) -> String {
    if items.is_empty() {
        return format!("The list is empty\n{}", status);
    }

    let mut result = String::new();
    for (index, item) in items.iter().enumerate() {
        result.push_str(&format_item(index, item));
        result.push('\n');
    }
    result.push('\n');
    result.push_str(&status.to_string());
    result
}
