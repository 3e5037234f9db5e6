//! Slot catalog.
//!
//! The fixed, ordered set of slots available for one session. Lookups by
//! slot ID are O(1); iteration follows the order the slots were supplied.

use std::collections::HashMap;

use super::{Slot, Weekday};

/// Immutable, ordered collection of slots indexed by ID.
#[derive(Debug, Clone, Default)]
pub struct SlotCatalog {
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
}

impl SlotCatalog {
    /// Builds a catalog from slots in display order.
    ///
    /// If two slots share an ID, lookups resolve to the first one;
    /// [`validate_input`](crate::validation::validate_input) reports the
    /// duplicate.
    pub fn new(slots: Vec<Slot>) -> Self {
        let mut index = HashMap::with_capacity(slots.len());
        for (i, slot) in slots.iter().enumerate() {
            index.entry(slot.id.clone()).or_insert(i);
        }
        Self { slots, index }
    }

    /// Looks up a slot by ID.
    pub fn get(&self, slot_id: &str) -> Option<&Slot> {
        self.index.get(slot_id).map(|&i| &self.slots[i])
    }

    /// Whether a slot ID exists in the catalog.
    pub fn contains(&self, slot_id: &str) -> bool {
        self.index.contains_key(slot_id)
    }

    /// All slots in catalog order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Iterates slots in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Slots held by a room.
    pub fn slots_in_room<'a>(&'a self, room: &'a str) -> impl Iterator<Item = &'a Slot> + 'a {
        self.slots.iter().filter(move |s| s.room == room)
    }

    /// Slots falling on a day.
    pub fn slots_on_day(&self, day: Weekday) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(move |s| s.day == day)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the catalog has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl From<Vec<Slot>> for SlotCatalog {
    fn from(slots: Vec<Slot>) -> Self {
        Self::new(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeRange;

    fn sample_catalog() -> SlotCatalog {
        let morning: TimeRange = "09:00-10:30".parse().unwrap();
        let noon: TimeRange = "11:00-12:30".parse().unwrap();
        SlotCatalog::new(vec![
            Slot::new("S1", Weekday::Monday, morning, "Room 101", 30),
            Slot::new("S2", Weekday::Monday, noon, "Lab 205", 20),
            Slot::new("S3", Weekday::Tuesday, morning, "Room 101", 30),
        ])
    }

    #[test]
    fn test_catalog_lookup() {
        let c = sample_catalog();
        assert_eq!(c.len(), 3);
        assert_eq!(c.get("S2").unwrap().room, "Lab 205");
        assert!(c.contains("S3"));
        assert!(c.get("S99").is_none());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let c = sample_catalog();
        let ids: Vec<&str> = c.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S2", "S3"]);
    }

    #[test]
    fn test_catalog_filters() {
        let c = sample_catalog();
        assert_eq!(c.slots_in_room("Room 101").count(), 2);
        assert_eq!(c.slots_on_day(Weekday::Monday).count(), 2);
        assert_eq!(c.slots_on_day(Weekday::Sunday).count(), 0);
    }

    #[test]
    fn test_duplicate_id_resolves_to_first() {
        let t: TimeRange = "09:00-10:00".parse().unwrap();
        let c = SlotCatalog::new(vec![
            Slot::new("S1", Weekday::Monday, t, "A", 10),
            Slot::new("S1", Weekday::Monday, t, "B", 10),
        ]);
        assert_eq!(c.get("S1").unwrap().room, "A");
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let c = SlotCatalog::default();
        assert!(c.is_empty());
        assert!(c.get("S1").is_none());
    }
}
