//! Ordered component list.
//!
//! [`ComponentList`] is the only owner of component records in a session.
//! Insertion order is display order and emission order for the flat code
//! generator.  Ids are unique within the list.

use super::id::IdGenerator;
use super::types::ComponentRecord;

/// Ordered, flat sequence of [`ComponentRecord`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentList {
    records: Vec<ComponentRecord>,
}

impl ComponentList {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Append `record` to the end of the list.
    ///
    /// Returns `false` (and leaves the list untouched) when a record with the
    /// same id is already present.
    pub fn append(&mut self, record: ComponentRecord) -> bool {
        if self.contains_id(&record.id) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Remove and return the record with exactly this id, if present.
    pub fn remove_by_id(&mut self, id: &str) -> Option<ComponentRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    /// Remove and return the last record.
    pub fn remove_last(&mut self) -> Option<ComponentRecord> {
        self.records.pop()
    }

    /// Replace the last record with `record`, keeping the list length.
    ///
    /// The replacement must carry the same id as the record it replaces;
    /// otherwise nothing happens and `false` is returned.
    pub fn replace_last(&mut self, record: ComponentRecord) -> bool {
        match self.records.last_mut() {
            Some(last) if last.id == record.id => {
                *last = record;
                true
            }
            _ => false,
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn last(&self) -> Option<&ComponentRecord> {
        self.records.last()
    }

    pub fn get(&self, id: &str) -> Option<&ComponentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComponentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Draw ids from `ids` until one is found that no record currently uses.
    pub fn allocate_id(&self, ids: &mut dyn IdGenerator) -> String {
        loop {
            let candidate = ids.generate();
            if !self.contains_id(&candidate) {
                return candidate;
            }
            log::debug!("component id collision on {candidate:?}, drawing again");
        }
    }
}

impl<'a> IntoIterator for &'a ComponentList {
    type Item = &'a ComponentRecord;
    type IntoIter = std::slice::Iter<'a, ComponentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::types::{ButtonProps, CardProps, ComponentProperties};

    fn button(id: &str) -> ComponentRecord {
        ComponentRecord::new(id, ComponentProperties::Button(ButtonProps::default()))
    }

    fn card(id: &str) -> ComponentRecord {
        ComponentRecord::new(id, ComponentProperties::Card(CardProps::default()))
    }

    /// Replays a fixed list of ids, including a repeat.
    struct Replay(Vec<&'static str>);

    impl IdGenerator for Replay {
        fn generate(&mut self) -> String {
            self.0.remove(0).to_string()
        }
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut list = ComponentList::new();
        assert!(list.append(button("a")));
        assert!(list.append(card("b")));
        assert!(list.append(button("c")));

        let ids: Vec<&str> = list.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn append_rejects_duplicate_id() {
        let mut list = ComponentList::new();
        assert!(list.append(button("a")));
        assert!(!list.append(card("a")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_by_id_removes_only_that_record() {
        let mut list = ComponentList::new();
        list.append(button("a"));
        list.append(button("b"));
        list.append(button("c"));

        let removed = list.remove_by_id("b").expect("present");
        assert_eq!(removed.id, "b");
        let ids: Vec<&str> = list.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn remove_by_absent_id_is_noop() {
        let mut list = ComponentList::new();
        list.append(button("a"));
        let before = list.clone();

        assert!(list.remove_by_id("zzz").is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn remove_last_on_empty_returns_none() {
        let mut list = ComponentList::new();
        assert!(list.remove_last().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn replace_last_requires_matching_id() {
        let mut list = ComponentList::new();
        list.append(button("a"));
        list.append(button("b"));

        assert!(!list.replace_last(card("a")));
        assert!(list.replace_last(card("b")));
        assert_eq!(list.last().unwrap(), &card("b"));
        assert_eq!(list.get("a").unwrap(), &button("a"));
    }

    #[test]
    fn allocate_id_skips_ids_in_use() {
        let mut list = ComponentList::new();
        list.append(button("taken"));

        let mut ids = Replay(vec!["taken", "taken", "fresh"]);
        assert_eq!(list.allocate_id(&mut ids), "fresh");
    }
}
