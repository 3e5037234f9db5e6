//! Conflict detection.
//!
//! Recomputes the complete conflict set from an assignment table and slot
//! catalog. The detector is a pure function: it owns no state and the
//! result depends only on its inputs.
//!
//! # Algorithm
//!
//! Walk the table in ascending slot-ID order. For each occupied slot with
//! key `(day, time)`:
//!
//! 1. **Instructor**: if the instructor already holds this key, flag the
//!    current item; otherwise record the key for the instructor.
//! 2. **Room**: same check against the slot's room.
//! 3. **Capacity**: if `students > capacity`, flag the item. Independent of
//!    steps 1-2.
//!
//! When two items clash, the one whose slot ID sorts second is flagged.
//! One item may collect several conflicts.
//!
//! # Complexity
//! O(n) expected, n = occupied slots.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::models::{AssignmentTable, Conflict, ConflictRule, SlotCatalog, SlotKey};

/// Detects every conflict in the current assignment.
///
/// Table entries whose slot is missing from the catalog are skipped.
/// Conflict IDs are `<rule>-<n>`, numbered in emission order; they are
/// stable for identical inputs but carry no meaning across calls.
///
/// # Example
///
/// ```
/// use u_timetable::conflicts::detect_conflicts;
/// use u_timetable::models::{AssignmentTable, ClassItem, Slot, SlotCatalog, Weekday};
///
/// let catalog = SlotCatalog::new(vec![Slot::new(
///     "S1",
///     Weekday::Monday,
///     "09:00-10:30".parse().unwrap(),
///     "Room 101",
///     20,
/// )]);
/// let mut table = AssignmentTable::new();
/// table.insert("S1", ClassItem::new("C1", "Calculus", "Dr. Smith").with_students(25));
///
/// let conflicts = detect_conflicts(&table, &catalog);
/// assert_eq!(conflicts.len(), 1);
/// ```
pub fn detect_conflicts(table: &AssignmentTable, catalog: &SlotCatalog) -> Vec<Conflict> {
    let mut instructor_keys: HashMap<&str, HashSet<SlotKey>> = HashMap::new();
    let mut room_keys: HashMap<&str, HashSet<SlotKey>> = HashMap::new();
    let mut conflicts = Vec::new();

    for (slot_id, item) in table {
        let Some(slot) = catalog.get(slot_id) else {
            trace!(slot_id = %slot_id, "skipping assignment to unknown slot");
            continue;
        };
        let key = slot.key();

        if !instructor_keys
            .entry(item.instructor.as_str())
            .or_default()
            .insert(key)
        {
            conflicts.push(Conflict::instructor_double_booking(item, slot));
        }

        if !room_keys.entry(slot.room.as_str()).or_default().insert(key) {
            conflicts.push(Conflict::room_double_booking(item, slot));
        }

        if !slot.fits(item.students) {
            conflicts.push(Conflict::capacity_overflow(item, slot));
        }
    }

    conflicts
        .into_iter()
        .enumerate()
        .map(|(n, c)| {
            let id = format!("{}-{n}", c.rule.tag());
            trace!(conflict_id = %id, slot_id = %c.slot_id, rule = %c.rule, "conflict detected");
            c.with_id(id)
        })
        .collect()
}

/// Counts conflicts per rule.
pub fn count_by_rule(conflicts: &[Conflict]) -> HashMap<ConflictRule, usize> {
    let mut counts = HashMap::new();
    for c in conflicts {
        *counts.entry(c.rule).or_insert(0) += 1;
    }
    counts
}
