//! Conflict model.
//!
//! A conflict reports one rule violation in the current assignment
//! snapshot. Conflicts are derived data: the whole set is rebuilt after
//! every mutation and none outlives the state it describes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ClassItem, Slot};

/// A detected scheduling conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Identifier, unique within one detection pass only.
    pub id: String,
    /// Reported kind (capacity overflow is reported as a room conflict).
    pub kind: ConflictKind,
    /// The rule that was violated.
    pub rule: ConflictRule,
    /// Human-readable description.
    pub message: String,
    /// Class items flagged by this conflict.
    pub class_item_ids: Vec<String>,
    /// Slot where the flagged item sits.
    pub slot_id: String,
}

/// Reported conflict category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    /// Instructor is booked twice at the same day and time.
    Instructor,
    /// Room is booked twice, or overfilled.
    Room,
}

/// The rule behind a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictRule {
    /// Same instructor, same (day, time).
    InstructorDoubleBooking,
    /// Same room, same (day, time).
    RoomDoubleBooking,
    /// Student count exceeds slot capacity.
    CapacityOverflow,
}

impl ConflictRule {
    /// The kind this rule is reported as.
    pub fn kind(&self) -> ConflictKind {
        match self {
            ConflictRule::InstructorDoubleBooking => ConflictKind::Instructor,
            ConflictRule::RoomDoubleBooking | ConflictRule::CapacityOverflow => ConflictKind::Room,
        }
    }

    /// Short tag used in conflict IDs.
    pub fn tag(&self) -> &'static str {
        match self {
            ConflictRule::InstructorDoubleBooking => "instructor",
            ConflictRule::RoomDoubleBooking => "room",
            ConflictRule::CapacityOverflow => "capacity",
        }
    }
}

impl fmt::Display for ConflictRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConflictRule::InstructorDoubleBooking => "instructor double-booking",
            ConflictRule::RoomDoubleBooking => "room double-booking",
            ConflictRule::CapacityOverflow => "capacity overflow",
        })
    }
}

impl Conflict {
    fn new(rule: ConflictRule, message: String, item: &ClassItem, slot: &Slot) -> Self {
        Self {
            id: String::new(),
            kind: rule.kind(),
            rule,
            message,
            class_item_ids: vec![item.id.clone()],
            slot_id: slot.id.clone(),
        }
    }

    /// Creates an instructor double-booking conflict for `item` in `slot`.
    pub fn instructor_double_booking(item: &ClassItem, slot: &Slot) -> Self {
        let message = format!(
            "{} is double-booked on {}: '{}' clashes with another class",
            item.instructor,
            slot.key(),
            item.subject
        );
        Self::new(ConflictRule::InstructorDoubleBooking, message, item, slot)
    }

    /// Creates a room double-booking conflict for `item` in `slot`.
    pub fn room_double_booking(item: &ClassItem, slot: &Slot) -> Self {
        let message = format!(
            "{} is double-booked on {}: '{}' clashes with another class",
            slot.room,
            slot.key(),
            item.subject
        );
        Self::new(ConflictRule::RoomDoubleBooking, message, item, slot)
    }

    /// Creates a capacity overflow conflict for `item` in `slot`.
    pub fn capacity_overflow(item: &ClassItem, slot: &Slot) -> Self {
        let message = format!(
            "'{}' has {} students but {} holds {}",
            item.subject, item.students, slot.room, slot.capacity
        );
        Self::new(ConflictRule::CapacityOverflow, message, item, slot)
    }

    /// Sets the identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Whether this conflict flags a class item.
    pub fn involves(&self, class_item_id: &str) -> bool {
        self.class_item_ids.iter().any(|id| id == class_item_id)
    }
}
