use crate::error::{ChecklistError, Result};
use serde::Serialize;

/// A single checklist entry
///
/// The text is stored exactly as given (case preserved) and is never empty or
/// whitespace-only. Serializes as `{"text": ..., "done": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    text: String,
    done: bool,
}

impl Item {
    /// Create an open (not done) item
    ///
    /// # Errors
    /// `EmptyInput` if `text` is empty or whitespace-only.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Self::with_done(text, false)
    }

    /// Create an item with an explicit completion flag
    ///
    /// The text is not trimmed; callers that accept raw user input trim first.
    pub fn with_done(text: impl Into<String>, done: bool) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ChecklistError::EmptyInput);
        }
        Ok(Self { text, done })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Flip the completion flag and return the new value
    pub(crate) fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }

    /// Check whether `text` names the same entry, ignoring case
    pub fn matches(&self, text: &str) -> bool {
        self.text.to_lowercase() == text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_open() {
        let item = Item::new("Milk").unwrap();
        assert_eq!(item.text(), "Milk");
        assert!(!item.is_done());
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(matches!(Item::new(""), Err(ChecklistError::EmptyInput)));
        assert!(matches!(
            Item::with_done(" \t\n", true),
            Err(ChecklistError::EmptyInput)
        ));
    }

    #[test]
    fn test_text_kept_verbatim() {
        // Surrounding whitespace is only stripped by the model on user input
        let item = Item::with_done("  Pan integral ", true).unwrap();
        assert_eq!(item.text(), "  Pan integral ");
        assert!(item.is_done());
    }

    #[test]
    fn test_matches_ignores_case() {
        let item = Item::new("Leche Entera").unwrap();
        assert!(item.matches("leche entera"));
        assert!(item.matches("LECHE ENTERA"));
        assert!(!item.matches("leche"));
    }

    #[test]
    fn test_matches_non_ascii_case() {
        let item = Item::new("Ñandú").unwrap();
        assert!(item.matches("ñandú"));
    }

    #[test]
    fn test_toggle_flips_flag() {
        let mut item = Item::new("Eggs").unwrap();
        assert!(item.toggle());
        assert!(!item.toggle());
    }
}
