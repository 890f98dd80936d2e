//! JSON document format for checklists
//!
//! A document is a bare JSON array of `{"text": string, "done": boolean}`
//! objects in list order. There is no wrapper object and no version field.
//!
//! Loading is strict about the document and lenient about its elements: a
//! document that fails to parse or is not an array is rejected as a whole,
//! while individual elements of the wrong shape are skipped.

use crate::checklist::item::Item;
use crate::error::{ChecklistError, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

/// Indent width used for saved documents unless configured otherwise
pub const DEFAULT_INDENT: usize = 4;

/// Items recovered from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Accepted items in document order
    pub items: Vec<Item>,
    /// Number of array elements that were dropped
    pub skipped: usize,
}

/// Serializer/deserializer for checklist documents
///
/// Holds no list state, only the output formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStore {
    indent: usize,
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

impl ListStore {
    /// Create a store that indents nested values by `indent` spaces
    ///
    /// An indent of 0 writes the whole array on one line.
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// Encode items as a JSON array, preserving order
    ///
    /// Non-ASCII text is written as-is, not as `\u` escapes.
    pub fn serialize(&self, items: &[Item]) -> Result<String> {
        if self.indent == 0 {
            return serde_json::to_string(items).map_err(ChecklistError::Encode);
        }

        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buf,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        items
            .serialize(&mut serializer)
            .map_err(ChecklistError::Encode)?;

        String::from_utf8(buf).map_err(|e| {
            ChecklistError::Encode(<serde_json::Error as serde::ser::Error>::custom(e))
        })
    }

    /// Decode a document into items
    ///
    /// # Errors
    /// - `MalformedJson` if `text` is not valid JSON
    /// - `InvalidShape` if the top-level value is not an array
    pub fn deserialize(&self, text: &str) -> Result<Vec<Item>> {
        self.decode(text).map(|decoded| decoded.items)
    }

    /// Decode a document, also reporting how many elements were dropped
    pub fn decode(&self, text: &str) -> Result<Decoded> {
        let value: Value = serde_json::from_str(text).map_err(ChecklistError::MalformedJson)?;

        let elements = match value {
            Value::Array(elements) => elements,
            other => {
                return Err(ChecklistError::InvalidShape {
                    found: value_kind(&other),
                });
            }
        };

        let total = elements.len();
        let items: Vec<Item> = elements.iter().filter_map(item_from_value).collect();
        let skipped = total - items.len();

        if skipped > 0 {
            log::warn!(
                "event=list_decode status=partial accepted={} skipped={}",
                items.len(),
                skipped
            );
        }

        Ok(Decoded { items, skipped })
    }
}

/// Accept an element only if it has a string `text` and a boolean `done`
fn item_from_value(value: &Value) -> Option<Item> {
    let object = value.as_object()?;
    let text = object.get("text")?.as_str()?;
    let done = object.get("done")?.as_bool()?;
    Item::with_done(text, done).ok()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
