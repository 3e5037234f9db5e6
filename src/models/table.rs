//! Assignment table.
//!
//! Maps slot IDs to the class item occupying them. A slot absent from the
//! table is empty; no slot holds more than one item.
//!
//! # Ordering
//! Iteration is in ascending slot-ID order (byte-wise string order). This is
//! the canonical order the conflict detector relies on for deterministic
//! attribution.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

use super::ClassItem;

/// Slot ID → occupying class item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentTable {
    entries: BTreeMap<String, ClassItem>,
}

impl AssignmentTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Class item in a slot, if occupied.
    pub fn get(&self, slot_id: &str) -> Option<&ClassItem> {
        self.entries.get(slot_id)
    }

    /// Whether a slot is occupied.
    pub fn is_occupied(&self, slot_id: &str) -> bool {
        self.entries.contains_key(slot_id)
    }

    /// Puts an item in a slot, returning the item it displaced.
    pub fn insert(&mut self, slot_id: impl Into<String>, item: ClassItem) -> Option<ClassItem> {
        self.entries.insert(slot_id.into(), item)
    }

    /// Empties a slot, returning its item.
    pub fn remove(&mut self, slot_id: &str) -> Option<ClassItem> {
        self.entries.remove(slot_id)
    }

    /// Empties every slot, returning the removed items in slot-ID order.
    pub fn clear(&mut self) -> Vec<ClassItem> {
        std::mem::take(&mut self.entries).into_values().collect()
    }

    /// Slot currently holding a class item.
    pub fn slot_of(&self, class_item_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, item)| item.id == class_item_id)
            .map(|(slot_id, _)| slot_id.as_str())
    }

    /// Iterates (slot ID, item) pairs in ascending slot-ID order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ClassItem> {
        self.entries.iter()
    }

    /// Iterates occupying items in ascending slot-ID order.
    pub fn items(&self) -> impl Iterator<Item = &ClassItem> {
        self.entries.values()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AssignmentTable {
    type Item = (&'a String, &'a ClassItem);
    type IntoIter = btree_map::Iter<'a, String, ClassItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, ClassItem)> for AssignmentTable {
    fn from_iter<I: IntoIterator<Item = (String, ClassItem)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ClassItem {
        ClassItem::new(id, "Subject", "Instructor")
    }

    #[test]
    fn test_insert_overwrites() {
        let mut t = AssignmentTable::new();
        assert!(t.insert("S1", item("A")).is_none());
        let displaced = t.insert("S1", item("B")).unwrap();
        assert_eq!(displaced.id, "A");
        assert_eq!(t.get("S1").unwrap().id, "B");
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_iteration_is_ascending_slot_id() {
        let t: AssignmentTable = vec![
            ("S3".to_string(), item("C")),
            ("S1".to_string(), item("A")),
            ("S2".to_string(), item("B")),
        ]
        .into_iter()
        .collect();
        let slots: Vec<&str> = t.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(slots, vec!["S1", "S2", "S3"]);
    }

    #[test]
    fn test_slot_of() {
        let mut t = AssignmentTable::new();
        t.insert("S2", item("B"));
        assert_eq!(t.slot_of("B"), Some("S2"));
        assert_eq!(t.slot_of("Z"), None);
    }

    #[test]
    fn test_clear_returns_items() {
        let mut t = AssignmentTable::new();
        t.insert("S2", item("B"));
        t.insert("S1", item("A"));
        let removed = t.clear();
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].id, "A");
        assert!(t.is_empty());
    }

    #[test]
    fn test_serializes_as_map() {
        let mut t = AssignmentTable::new();
        t.insert("S1", item("A"));
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["S1"]["id"], "A");
    }
}
