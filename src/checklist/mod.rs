//! Checklist domain model and JSON persistence format
//!
//! This module contains the core checklist structures:
//! - `item`: a single entry (text + completion flag)
//! - `list_model`: the ordered collection and all mutation/query operations
//! - `status`: derived counts and completion percentage
//! - `list_store`: JSON serialization with shape validation on load

mod item;
mod list_model;
mod list_store;
mod status;

// Re-export all public types
pub use item::Item;
pub use list_model::{AddOutcome, Added, ListModel};
pub use list_store::{DEFAULT_INDENT, Decoded, ListStore};
pub use status::Status;
