//! Common test utilities for integration tests
#![allow(dead_code)]

use checklist_mcp::{ChecklistServerHandler, Item, ListModel, ListStore};
use tempfile::TempDir;

/// Create a test handler whose default file lives in a temporary directory
pub fn get_test_handler() -> (ChecklistServerHandler, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let handler =
        ChecklistServerHandler::new(temp_dir.path().join("list.json"), ListStore::default())
            .unwrap();
    (handler, temp_dir)
}

/// Build a model holding open items with the given texts, in order
pub fn model_with(texts: &[&str]) -> ListModel {
    let mut model = ListModel::new();
    for text in texts {
        model.add_forced(text).unwrap();
    }
    model
}

/// Texts of the items in order
pub fn texts(items: &[Item]) -> Vec<String> {
    items.iter().map(|item| item.text().to_string()).collect()
}
