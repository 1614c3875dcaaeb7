//! List Store
//!
//! Owns the ordered item collection and is the sole writer to persistent
//! storage. Every mutating operation re-serializes the full list synchronously,
//! so the stored state never trails the in-memory state by more than one
//! operation.

use thiserror::Error;

use crate::models::Item;
use crate::storage::KeyValueStore;

/// Storage slot holding the serialized list
pub const STORAGE_KEY: &str = "quicklist.items";

/// Minimum trimmed length for item text
pub const MIN_TEXT_LEN: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("Minimum 5 characters required.")]
    TextTooShort,
}

/// Outcome of an edit that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    /// New text was equivalent to the current text (or the item is gone);
    /// nothing was written
    Unchanged,
}

/// Check the minimum-length invariant. Also used by the new-item form so a
/// too-short draft is rejected before the image file is read.
pub fn validate_text(text: &str) -> Result<(), ListError> {
    if text.trim().chars().count() < MIN_TEXT_LEN {
        Err(ListError::TextTooShort)
    } else {
        Ok(())
    }
}

/// Id generation capability. Production ids are clock-based; tests use a
/// sequential source.
pub trait IdSource {
    fn next_id(&mut self) -> u64;
}

/// Millisecond timestamp scaled by 1000 plus a random salt, so two creations
/// within the same millisecond still get distinct ids. Stays below 2^53 for
/// the foreseeable future, keeping the persisted JSON safe for JS numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockIds;

impl IdSource for ClockIds {
    fn next_id(&mut self) -> u64 {
        let millis = js_sys::Date::now() as u64;
        let salt = (js_sys::Math::random() * 1000.0) as u64;
        millis * 1000 + salt
    }
}

/// The ordered list plus its persistence backend and id source
#[derive(Debug, Clone)]
pub struct ListStore<S, I> {
    items: Vec<Item>,
    store: S,
    ids: I,
}

/// Concrete store used by the running app
pub type BrowserList = ListStore<crate::storage::BrowserStorage, ClockIds>;

impl<S: KeyValueStore, I: IdSource> ListStore<S, I> {
    /// Read the persisted list. Absent or malformed data falls back to an
    /// empty list; a broken slot is not worth surfacing to the user.
    pub fn load(store: S, ids: I) -> Self {
        let items = match store.get(STORAGE_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(err) => {
                    leptos::logging::warn!("[list] discarding malformed stored list: {err}");
                    Vec::new()
                }
            },
        };
        Self { items, store, ids }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|it| it.id == id)
    }

    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|it| it.id == id)
    }

    /// Prepend a new item. The text is stored as given; only the trimmed form
    /// is validated. A supplied image must already have passed ingest
    /// validation, so it arrives here as an encoded data URL.
    pub fn add(&mut self, text: &str, img: Option<String>) -> Result<(), ListError> {
        validate_text(text)?;
        let item = Item {
            id: self.ids.next_id(),
            text: text.to_string(),
            img,
        };
        self.items.insert(0, item);
        self.persist();
        Ok(())
    }

    /// Replace the text of the matching item, preserving id, image and
    /// position. Editing to an equivalent (trimmed-equal) text is a silent
    /// no-op to avoid redundant writes.
    pub fn edit(&mut self, id: u64, new_text: &str) -> Result<EditOutcome, ListError> {
        validate_text(new_text)?;
        let Some(item) = self.items.iter_mut().find(|it| it.id == id) else {
            return Ok(EditOutcome::Unchanged);
        };
        if item.text.trim() == new_text.trim() {
            return Ok(EditOutcome::Unchanged);
        }
        item.text = new_text.to_string();
        self.persist();
        Ok(EditOutcome::Updated)
    }

    /// Remove the item with the given id. Deleting an absent id is treated as
    /// already-deleted and returns false.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|it| it.id != id);
        if self.items.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Replace only the image of a still-present item. Returns false when the
    /// item is gone, which is what discards an encode that resolved after the
    /// item was deleted.
    pub fn replace_image(&mut self, id: u64, img: String) -> bool {
        let Some(item) = self.items.iter_mut().find(|it| it.id == id) else {
            return false;
        };
        item.img = Some(img);
        self.persist();
        true
    }

    /// Shift the item at `index` by `delta` positions. An out-of-bounds result
    /// is silently absorbed.
    pub fn move_item(&mut self, index: usize, delta: isize) -> bool {
        let Some(new_index) = index.checked_add_signed(delta) else {
            return false;
        };
        if index >= self.items.len() || new_index >= self.items.len() {
            return false;
        }
        let item = self.items.remove(index);
        self.items.insert(new_index, item);
        self.persist();
        true
    }

    /// Move the item at `from` to position `to` (arbitrary distance). No-op
    /// when the indexes are equal or out of range.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.persist();
        true
    }

    fn persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(json) => self.store.set(STORAGE_KEY, &json),
            Err(err) => leptos::logging::warn!("[list] failed to serialize list: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};

    struct SeqIds(u64);

    impl IdSource for SeqIds {
        fn next_id(&mut self) -> u64 {
            self.0 += 1;
            self.0
        }
    }

    fn empty_list() -> ListStore<MemoryStore, SeqIds> {
        ListStore::load(MemoryStore::new(), SeqIds(0))
    }

    /// List pre-filled with n valid items; item texts are "item 1".."item n",
    /// newest first (so "item n" sits at index 0).
    fn list_with(n: u64) -> ListStore<MemoryStore, SeqIds> {
        let mut list = empty_list();
        for i in 1..=n {
            list.add(&format!("item {i}"), None).unwrap();
        }
        list
    }

    fn texts(list: &ListStore<MemoryStore, SeqIds>) -> Vec<&str> {
        list.items().iter().map(|it| it.text.as_str()).collect()
    }

    #[test]
    fn test_add_prepends() {
        let mut list = empty_list();
        list.add("Hello world", None).unwrap();
        list.add("Hello universe", None).unwrap();

        assert_eq!(texts(&list), vec!["Hello universe", "Hello world"]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[0].img, None);
    }

    #[test]
    fn test_add_rejects_short_text() {
        let mut list = list_with(1);
        for text in ["Hi", "    ", "abcd", "  abcd  ", ""] {
            assert_eq!(list.add(text, None), Err(ListError::TextTooShort));
        }
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_stores_raw_text() {
        let mut list = empty_list();
        list.add("  Hello world  ", None).unwrap();
        assert_eq!(list.items()[0].text, "  Hello world  ");
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        let mut list = empty_list();
        // 5 characters, more than 5 bytes
        list.add("héllo", None).unwrap();
        assert_eq!(list.len(), 1);
        // 4 characters
        assert_eq!(list.add("héll", None), Err(ListError::TextTooShort));
    }

    #[test]
    fn test_edit_replaces_only_text() {
        let mut list = empty_list();
        list.add("Hello world", Some("data:image/png;base64,AAAA".to_string()))
            .unwrap();
        list.add("second item", None).unwrap();
        let id = list.items()[1].id;

        assert_eq!(list.edit(id, "Hello universe"), Ok(EditOutcome::Updated));

        let item = &list.items()[1];
        assert_eq!(item.id, id);
        assert_eq!(item.text, "Hello universe");
        assert_eq!(item.img.as_deref(), Some("data:image/png;base64,AAAA"));
        // Position unchanged
        assert_eq!(list.items()[0].text, "second item");
    }

    #[test]
    fn test_edit_rejects_short_text() {
        let mut list = list_with(1);
        let id = list.items()[0].id;
        assert_eq!(list.edit(id, "tiny"), Err(ListError::TextTooShort));
        assert_eq!(list.items()[0].text, "item 1");
    }

    #[test]
    fn test_edit_trimmed_equal_is_unchanged() {
        let mut list = empty_list();
        list.add("Hello world", None).unwrap();
        let id = list.items()[0].id;

        assert_eq!(list.edit(id, "  Hello world  "), Ok(EditOutcome::Unchanged));
        assert_eq!(list.items()[0].text, "Hello world");
    }

    #[test]
    fn test_edit_missing_id_is_unchanged() {
        let mut list = list_with(1);
        assert_eq!(list.edit(9999, "Hello world"), Ok(EditOutcome::Unchanged));
        assert_eq!(texts(&list), vec!["item 1"]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut list = list_with(2);
        let id = list.items()[0].id;

        assert!(list.delete(id));
        assert_eq!(list.len(), 1);

        // Second delete of the same id is a quiet no-op
        assert!(!list.delete(id));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_replace_image_preserves_text_and_order() {
        let mut list = list_with(3);
        let id = list.items()[1].id;

        assert!(list.replace_image(id, "data:image/png;base64,BBBB".to_string()));

        assert_eq!(texts(&list), vec!["item 3", "item 2", "item 1"]);
        assert_eq!(list.items()[1].img.as_deref(), Some("data:image/png;base64,BBBB"));
    }

    #[test]
    fn test_replace_image_on_deleted_item_is_discarded() {
        let mut list = list_with(1);
        let id = list.items()[0].id;
        list.delete(id);

        // Late-resolving encode for an item that no longer exists
        assert!(!list.replace_image(id, "data:image/png;base64,CCCC".to_string()));
        assert!(list.is_empty());
    }

    #[test]
    fn test_move_item_shifts_by_one() {
        let mut list = list_with(3);

        assert!(list.move_item(0, 1));
        assert_eq!(texts(&list), vec!["item 2", "item 3", "item 1"]);

        assert!(list.move_item(1, -1));
        assert_eq!(texts(&list), vec!["item 3", "item 2", "item 1"]);
    }

    #[test]
    fn test_move_out_of_bounds_is_noop() {
        let mut list = list_with(2);

        assert!(!list.move_item(0, -1));
        assert!(!list.move_item(1, 1));
        assert!(!list.move_item(5, 1));
        assert_eq!(texts(&list), vec!["item 2", "item 1"]);

        // Single-item list cannot move anywhere
        let mut single = list_with(1);
        assert!(!single.move_item(0, -1));
        assert!(!single.move_item(0, 1));
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_reorder_arbitrary_distance() {
        let mut list = list_with(4);
        // ["item 4", "item 3", "item 2", "item 1"]
        assert!(list.reorder(3, 0));
        assert_eq!(texts(&list), vec!["item 1", "item 4", "item 3", "item 2"]);
    }

    #[test]
    fn test_reorder_inverse_law() {
        let mut list = list_with(5);
        let original: Vec<Item> = list.items().to_vec();

        assert!(list.reorder(1, 4));
        assert!(list.reorder(4, 1));
        assert_eq!(list.items(), &original[..]);
    }

    #[test]
    fn test_reorder_noops() {
        let mut list = list_with(3);
        let original: Vec<Item> = list.items().to_vec();

        assert!(!list.reorder(1, 1));
        assert!(!list.reorder(0, 3));
        assert!(!list.reorder(7, 0));
        assert_eq!(list.items(), &original[..]);
    }

    #[test]
    fn test_storage_round_trip() {
        let backend = MemoryStore::new();
        let mut list = ListStore::load(backend.clone(), SeqIds(0));
        list.add("Hello world", None).unwrap();
        list.add("with image!", Some("data:image/png;base64,DDDD".to_string()))
            .unwrap();
        list.reorder(0, 1);

        let reloaded = ListStore::load(backend, SeqIds(100));
        assert_eq!(reloaded.items(), list.items());
    }

    #[test]
    fn test_every_mutation_persists() {
        let backend = MemoryStore::new();
        let mut list = ListStore::load(backend.clone(), SeqIds(0));

        let stored = |backend: &MemoryStore| -> Vec<Item> {
            serde_json::from_str(&backend.get(STORAGE_KEY).unwrap()).unwrap()
        };

        list.add("item one", None).unwrap();
        list.add("item two", None).unwrap();
        assert_eq!(stored(&backend), list.items());

        let id = list.items()[0].id;
        list.edit(id, "item two, edited").unwrap();
        assert_eq!(stored(&backend), list.items());

        list.move_item(0, 1);
        assert_eq!(stored(&backend), list.items());

        list.replace_image(id, "data:image/png;base64,EEEE".to_string());
        assert_eq!(stored(&backend), list.items());

        list.delete(id);
        assert_eq!(stored(&backend), list.items());
    }

    #[test]
    fn test_failed_add_writes_nothing() {
        let backend = MemoryStore::new();
        let mut list = ListStore::load(backend.clone(), SeqIds(0));
        assert!(list.add("tiny", None).is_err());
        assert_eq!(backend.get(STORAGE_KEY), None);
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let list = empty_list();
        assert!(list.is_empty());
    }

    #[test]
    fn test_load_malformed_slot_is_empty() {
        let backend = MemoryStore::new();
        backend.set(STORAGE_KEY, "{not json at all");
        let list = ListStore::load(backend.clone(), SeqIds(0));
        assert!(list.is_empty());

        // Wrong shape is also recovered silently
        backend.set(STORAGE_KEY, r#"{"id":1}"#);
        let list = ListStore::load(backend, SeqIds(0));
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let mut list = list_with(3);
        let ids: Vec<u64> = list.items().iter().map(|it| it.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        list.reorder(0, 2);
        list.edit(3, "still item 3").unwrap();
        assert_eq!(list.get(3).unwrap().text, "still item 3");
    }

    #[test]
    fn test_index_of() {
        let list = list_with(2);
        let first = list.items()[0].id;
        assert_eq!(list.index_of(first), Some(0));
        assert_eq!(list.index_of(9999), None);
    }
}
