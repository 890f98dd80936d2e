//! Checklist MCP Server Library
//!
//! This library provides a personal checklist (named line items with a
//! completion flag) and a Model Context Protocol (MCP) server that exposes it.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `ChecklistServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `checklist` module - `ListModel` mutations/queries and the
//!   `ListStore` JSON format
//! - **Persistence Layer**: `storage` module - Reads and writes list documents
//!
//! The domain layer has no knowledge of MCP and can be used on its own:
//!
//! ```
//! use checklist_mcp::{AddOutcome, ListModel, ListStore};
//!
//! let mut model = ListModel::new();
//! model.add("Milk").unwrap();
//! assert!(matches!(model.add("milk").unwrap(), AddOutcome::Duplicate { .. }));
//! model.toggle(0).unwrap();
//! assert_eq!(model.status().percent, 100);
//!
//! let json = ListStore::default().serialize(model.items()).unwrap();
//! assert_eq!(ListStore::default().deserialize(&json).unwrap(), model.snapshot());
//! ```

pub mod checklist;
pub mod error;
mod formatting;
pub mod handlers;
pub mod logging;
pub mod settings;
mod storage;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use checklist::{AddOutcome, Added, Decoded, Item, ListModel, ListStore, Status};
pub use error::ChecklistError;
pub use settings::Settings;
pub use storage::Storage;

/// MCP Server handler for checklist management
///
/// Owns one `ListModel` behind a single mutex; every tool call locks it for
/// the duration of one model operation. Saving and opening go through
/// `Storage` and happen only when a tool asks for them.
pub struct ChecklistServerHandler {
    pub(crate) data: Mutex<ListModel>,
    pub(crate) storage: Storage,
}

impl ChecklistServerHandler {
    /// Create a new checklist server handler
    ///
    /// # Arguments
    /// * `storage_path` - Default checklist document (JSON). Loaded now if it exists.
    /// * `store` - Document format settings used for saving
    ///
    /// # Returns
    /// Result containing the handler or an error if the existing document
    /// cannot be read or is not a JSON array
    ///
    /// # Example
    /// ```no_run
    /// # use checklist_mcp::{ChecklistServerHandler, ListStore};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = ChecklistServerHandler::new("groceries.json", ListStore::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: impl AsRef<Path>, store: ListStore) -> Result<Self> {
        let storage = Storage::new(storage_path, store);
        let decoded = storage.load()?;
        let data = Mutex::new(ListModel::from_items(decoded.items));
        Ok(Self { data, storage })
    }

    /// Lock the model
    ///
    /// A poisoned lock is recovered: every model operation leaves the list
    /// consistent before it can panic.
    pub(crate) fn model(&self) -> MutexGuard<'_, ListModel> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current items
    pub fn snapshot(&self) -> Vec<Item> {
        self.model().snapshot()
    }

    /// Status of the current items
    pub fn current_status(&self) -> Status {
        self.model().status()
    }

    /// Default document path
    pub fn file_path(&self) -> &Path {
        self.storage.file_path()
    }
}

/// Personal checklist server: a single ordered list of items, each with a done flag.
///
/// Items are addressed by zero-based position as shown by `list`. Positions
/// shift after a delete, so call `list` again before using them.
///
/// Key concepts:
/// - **add**: append an item; duplicates (same text ignoring case) need confirmation
/// - **toggle**: mark an item done / not done
/// - **delete**: remove items by position
/// - **clear**: remove everything
/// - **list** / **status**: review the list and its completion percentage
/// - **save** / **open**: write or read the list as a JSON file
#[mcp_server]
impl McpServer for ChecklistServerHandler {
    /// **Add**: Append an item to the end of the list. Surrounding whitespace is trimmed.
    /// **Duplicates**: If an item with the same text (ignoring case) exists, nothing is added
    /// and a duplicate notice is returned. Ask the user, then call add again with force=true.
    #[tool]
    async fn add(
        &self,
        /// Item text (must not be blank)
        text: String,
        /// Add even if an item with the same text exists (optional, default false)
        force: Option<bool>,
    ) -> McpResult<String> {
        self.handle_add(text, force).await
    }

    /// **Toggle**: Mark the item at a position as done, or back to not done.
    #[tool]
    async fn toggle(
        &self,
        /// Zero-based position from list
        index: usize,
    ) -> McpResult<String> {
        self.handle_toggle(index).await
    }

    /// **Delete**: Remove the items at the given positions. Order and repeats do not matter.
    /// Positions past the end are ignored.
    #[tool]
    async fn delete(
        &self,
        /// Zero-based positions from list (at least one)
        indices: Vec<usize>,
    ) -> McpResult<String> {
        self.handle_delete(indices).await
    }

    /// **Clear**: Remove every item. Confirm with the user first; this cannot be undone.
    #[tool]
    async fn clear(&self) -> McpResult<String> {
        self.handle_clear().await
    }

    /// **List**: Show every item with its position and done mark, plus the status line.
    #[tool]
    async fn list(&self) -> McpResult<String> {
        self.handle_list().await
    }

    /// **Status**: Item count, done count and completion percentage.
    #[tool]
    async fn status(&self) -> McpResult<String> {
        self.handle_status().await
    }

    /// **Save**: Write the list to a JSON file. Without a path, the server's default file is used.
    /// A path without an extension gets ".json".
    #[tool]
    async fn save(
        &self,
        /// Target file path (optional)
        path: Option<String>,
    ) -> McpResult<String> {
        self.handle_save(path).await
    }

    /// **Open**: Replace the list with the contents of a JSON file. Without a path, the server's
    /// default file is used. Invalid files leave the current list unchanged.
    #[tool]
    async fn open(
        &self,
        /// Source file path (optional)
        path: Option<String>,
    ) -> McpResult<String> {
        self.handle_open(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn get_test_handler() -> (ChecklistServerHandler, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let handler =
            ChecklistServerHandler::new(temp_dir.path().join("list.json"), ListStore::default())
                .unwrap();
        (handler, temp_dir)
    }

    #[test]
    fn test_new_without_file_starts_empty() {
        let (handler, temp_dir) = get_test_handler();
        assert!(handler.snapshot().is_empty());
        assert_eq!(handler.file_path(), temp_dir.path().join("list.json"));
    }

    #[test]
    fn test_new_loads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.json");
        std::fs::write(&path, r#"[{"text":"Arroz","done":true},{"text":"Sal"}]"#).unwrap();

        let handler = ChecklistServerHandler::new(&path, ListStore::default()).unwrap();
        assert_eq!(handler.snapshot(), vec![Item::with_done("Arroz", true).unwrap()]);
        assert_eq!(handler.current_status().percent, 100);
    }

    #[test]
    fn test_new_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(ChecklistServerHandler::new(&path, ListStore::default()).is_err());
    }

    #[tokio::test]
    async fn test_handlers_drive_model() {
        let (handler, _temp_dir) = get_test_handler();

        handler.handle_add("Milk".to_string(), None).await.unwrap();
        handler.handle_add("Bread".to_string(), None).await.unwrap();
        handler.handle_toggle(1).await.unwrap();

        let list = handler.handle_list().await.unwrap();
        assert!(list.contains("[0] [ ] Milk"));
        assert!(list.contains("[1] [✔] Bread"));

        let status = handler.handle_status().await.unwrap();
        assert_eq!(status, "2 item(s) · 1 done · 50% complete");

        handler.handle_delete(vec![0]).await.unwrap();
        assert_eq!(handler.snapshot(), vec![Item::with_done("Bread", true).unwrap()]);

        handler.handle_clear().await.unwrap();
        assert!(handler.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_poisoned_lock_is_recovered() {
        let (handler, _temp_dir) = get_test_handler();
        handler.handle_add("Milk".to_string(), None).await.unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = handler.data.lock().unwrap();
            panic!("poison the lock");
        }));
        assert!(result.is_err());
        assert!(handler.data.is_poisoned());

        assert_eq!(handler.snapshot().len(), 1);
        handler.handle_add("Eggs".to_string(), None).await.unwrap();
        assert_eq!(handler.current_status().total, 2);
    }
}
