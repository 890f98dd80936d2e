use crate::checklist::item::Item;
use crate::checklist::status::Status;
use crate::error::{ChecklistError, Result};
use std::collections::BTreeSet;

/// Position and resulting length after an item was appended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Added {
    /// Zero-based position of the new item
    pub index: usize,
    /// Number of items in the list after the append
    pub len: usize,
}

/// Outcome of a checked add
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was appended
    Added(Added),
    /// An item with the same text (ignoring case) already exists; nothing changed.
    /// Use [`ListModel::add_forced`] once the user confirms.
    Duplicate {
        /// Text of the existing item as stored
        existing: String,
    },
}

/// Ordered, in-memory checklist
///
/// Insertion order is preserved by every operation; `delete_at` removes by
/// position and keeps the rest in their original relative order. The model
/// never hands out mutable references to its items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListModel {
    items: Vec<Item>,
}

impl ListModel {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding `items` in the given order
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Read-only view of the items in order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Owned copy of the items, for rendering or persistence
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Find the existing item whose text matches `text` ignoring case
    pub fn find_duplicate(&self, text: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches(text))
    }

    /// Add an item from raw user input
    ///
    /// The text is trimmed first. A case-insensitive match against an existing
    /// item is reported as [`AddOutcome::Duplicate`] without changing the list.
    ///
    /// # Errors
    /// `EmptyInput` if the trimmed text is empty.
    pub fn add(&mut self, text: &str) -> Result<AddOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChecklistError::EmptyInput);
        }

        if let Some(existing) = self.find_duplicate(text) {
            log::debug!(
                "event=item_add status=duplicate text={:?} existing={:?}",
                text,
                existing.text()
            );
            return Ok(AddOutcome::Duplicate {
                existing: existing.text().to_string(),
            });
        }

        self.append(text).map(AddOutcome::Added)
    }

    /// Add an item from raw user input, skipping the duplicate check
    ///
    /// This is the confirmation path after [`ListModel::add`] reported a
    /// duplicate. The text is still trimmed and must not be empty.
    pub fn add_forced(&mut self, text: &str) -> Result<Added> {
        self.append(text.trim())
    }

    fn append(&mut self, text: &str) -> Result<Added> {
        let item = Item::new(text)?;
        self.items.push(item);
        let added = Added {
            index: self.items.len() - 1,
            len: self.items.len(),
        };
        log::debug!(
            "event=item_add status=ok index={} len={}",
            added.index,
            added.len
        );
        Ok(added)
    }

    /// Flip the completion flag of the item at `index`
    ///
    /// # Returns
    /// The new `done` value
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= len`.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(ChecklistError::IndexOutOfRange { index, len })?;
        let done = item.toggle();
        log::debug!("event=item_toggle index={} done={}", index, done);
        Ok(done)
    }

    /// Remove the items at the given positions
    ///
    /// Positions may arrive in any order and may repeat. Positions past the end
    /// are ignored rather than failing the whole call.
    ///
    /// # Returns
    /// The number of items actually removed
    ///
    /// # Errors
    /// `EmptySelection` if no positions were given.
    pub fn delete_at<I>(&mut self, indices: I) -> Result<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let selection: BTreeSet<usize> = indices.into_iter().collect();
        if selection.is_empty() {
            return Err(ChecklistError::EmptySelection);
        }

        let len = self.items.len();
        let mut removed = 0;
        // Highest first so pending positions keep pointing at the same items
        for &index in selection.iter().rev().filter(|&&index| index < len) {
            self.items.remove(index);
            removed += 1;
        }

        if removed < selection.len() {
            log::debug!(
                "event=item_delete ignored={} reason=out_of_range",
                selection.len() - removed
            );
        }
        log::debug!("event=item_delete removed={} len={}", removed, self.len());
        Ok(removed)
    }

    /// Remove every item
    ///
    /// # Returns
    /// The number of items removed
    ///
    /// # Errors
    /// `AlreadyEmpty` if there is nothing to clear.
    pub fn clear(&mut self) -> Result<usize> {
        if self.items.is_empty() {
            return Err(ChecklistError::AlreadyEmpty);
        }
        let removed = self.items.len();
        self.items.clear();
        log::debug!("event=list_clear removed={}", removed);
        Ok(removed)
    }

    /// Replace the whole list, keeping the order of `items`
    ///
    /// Used after a document was loaded successfully.
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Counts and completion percentage
    pub fn status(&self) -> Status {
        let done = self.items.iter().filter(|item| item.is_done()).count();
        Status::new(self.items.len(), done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(texts: &[&str]) -> ListModel {
        let mut model = ListModel::new();
        for text in texts {
            model.add_forced(text).unwrap();
        }
        model
    }

    fn texts(model: &ListModel) -> Vec<&str> {
        model.items().iter().map(Item::text).collect()
    }

    #[test]
    fn test_add_appends_open_item() {
        let mut model = ListModel::new();

        let outcome = model.add("Milk").unwrap();
        assert_eq!(outcome, AddOutcome::Added(Added { index: 0, len: 1 }));

        let outcome = model.add("Bread").unwrap();
        assert_eq!(outcome, AddOutcome::Added(Added { index: 1, len: 2 }));

        assert_eq!(texts(&model), vec!["Milk", "Bread"]);
        assert!(!model.get(1).unwrap().is_done());
    }

    #[test]
    fn test_add_trims_input() {
        let mut model = ListModel::new();
        model.add("   Coffee  \n").unwrap();
        assert_eq!(texts(&model), vec!["Coffee"]);
    }

    #[test]
    fn test_add_blank_is_rejected() {
        let mut model = model_with(&["Milk"]);
        assert!(matches!(model.add(""), Err(ChecklistError::EmptyInput)));
        assert!(matches!(model.add("   "), Err(ChecklistError::EmptyInput)));
        assert!(matches!(
            model.add_forced("\t"),
            Err(ChecklistError::EmptyInput)
        ));
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_add_duplicate_is_reported_not_applied() {
        let mut model = model_with(&["Milk"]);

        let outcome = model.add("  milk ").unwrap();
        assert_eq!(
            outcome,
            AddOutcome::Duplicate {
                existing: "Milk".to_string()
            }
        );
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_add_forced_appends_duplicate() {
        let mut model = model_with(&["Milk"]);

        let added = model.add_forced("milk").unwrap();
        assert_eq!(added, Added { index: 1, len: 2 });
        assert_eq!(texts(&model), vec!["Milk", "milk"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut model = model_with(&["A", "B"]);

        assert!(model.toggle(1).unwrap());
        assert!(model.get(1).unwrap().is_done());
        assert!(!model.get(0).unwrap().is_done());

        assert!(!model.toggle(1).unwrap());
        assert!(!model.get(1).unwrap().is_done());
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut model = model_with(&["A"]);
        assert!(matches!(
            model.toggle(1),
            Err(ChecklistError::IndexOutOfRange { index: 1, len: 1 })
        ));

        let mut empty = ListModel::new();
        assert!(matches!(
            empty.toggle(0),
            Err(ChecklistError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_delete_at_keeps_relative_order() {
        let mut model = model_with(&["A", "B", "C"]);
        assert_eq!(model.delete_at([0, 2]).unwrap(), 2);
        assert_eq!(texts(&model), vec!["B"]);
    }

    #[test]
    fn test_delete_at_unordered_with_repeats() {
        let mut model = model_with(&["A", "B", "C", "D", "E"]);
        assert_eq!(model.delete_at([3, 1, 3, 1]).unwrap(), 2);
        assert_eq!(texts(&model), vec!["A", "C", "E"]);
    }

    #[test]
    fn test_delete_at_ignores_out_of_range() {
        let mut model = model_with(&["A", "B", "C"]);
        assert_eq!(model.delete_at([5]).unwrap(), 0);
        assert_eq!(texts(&model), vec!["A", "B", "C"]);

        assert_eq!(model.delete_at([1, 9]).unwrap(), 1);
        assert_eq!(texts(&model), vec!["A", "C"]);
    }

    #[test]
    fn test_delete_at_empty_selection() {
        let mut model = model_with(&["A"]);
        assert!(matches!(
            model.delete_at(Vec::new()),
            Err(ChecklistError::EmptySelection)
        ));
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut model = model_with(&["A", "B"]);
        assert_eq!(model.clear().unwrap(), 2);
        assert!(model.is_empty());
        assert!(matches!(model.clear(), Err(ChecklistError::AlreadyEmpty)));
    }

    #[test]
    fn test_status() {
        let mut model = ListModel::new();
        assert_eq!(model.status(), Status::new(0, 0));
        assert_eq!(model.status().percent, 0);

        model = model_with(&["A", "B", "C"]);
        model.toggle(0).unwrap();
        model.toggle(1).unwrap();
        let status = model.status();
        assert_eq!(status.total, 3);
        assert_eq!(status.done, 2);
        assert_eq!(status.percent, 67);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut model = model_with(&["A"]);
        let snapshot = model.snapshot();
        model.toggle(0).unwrap();
        assert!(!snapshot[0].is_done());
        assert!(model.get(0).unwrap().is_done());
    }

    #[test]
    fn test_replace_all() {
        let mut model = model_with(&["Old"]);
        model.replace_all(vec![
            Item::with_done("X", true).unwrap(),
            Item::new("Y").unwrap(),
        ]);
        assert_eq!(texts(&model), vec!["X", "Y"]);
        assert_eq!(model.status().done, 1);
    }
}
