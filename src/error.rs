//! Error types for checklist operations
//!
//! Every error here is recoverable: the caller reports it and the list stays
//! as it was before the failing call.

/// Result type alias for checklist operations.
pub type Result<T> = std::result::Result<T, ChecklistError>;

/// Errors raised by the list model and the JSON list store.
#[derive(Debug, thiserror::Error)]
pub enum ChecklistError {
    /// Item text was empty or whitespace-only.
    #[error("Item text is empty. Type something to add.")]
    EmptyInput,

    /// A position did not address an existing item.
    #[error("Index {index} is out of range (the list has {len} item(s))")]
    IndexOutOfRange { index: usize, len: usize },

    /// A bulk delete was requested without any positions.
    #[error("No items selected. Select at least one item to delete.")]
    EmptySelection,

    /// Clear was requested on a list with nothing in it.
    #[error("The list is already empty")]
    AlreadyEmpty,

    /// The document could not be parsed as JSON.
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// The document parsed, but its top-level value is not an array.
    #[error("Invalid list document: expected a JSON array, found {found}")]
    InvalidShape { found: &'static str },

    /// The items could not be encoded as JSON.
    #[error("Failed to encode list: {0}")]
    Encode(#[source] serde_json::Error),
}
