//! Input and state validation for timetable sessions.
//!
//! Checks structural integrity of the slot catalog and initial pool
//! before a session opens. Detects:
//! - Empty or duplicate slot IDs
//! - Empty or duplicate class item IDs
//! - Zero-capacity slots
//! - Malformed time ranges (deserialized input bypasses the constructor)
//!
//! Also checks the exclusivity invariant of a live session: each class item
//! sits in exactly one place.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{AssignmentTable, ClassItem, Slot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An identity is the empty string.
    EmptyId,
    /// Two slots share the same ID.
    DuplicateSlotId,
    /// Two class items share the same ID, or an item sits in two places.
    DuplicateClassItemId,
    /// A slot has zero capacity.
    InvalidCapacity,
    /// A slot's time range is empty, inverted, or past midnight.
    InvalidTimeRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs of a timetable session.
///
/// Checks:
/// 1. No empty slot IDs, no duplicate slot IDs
/// 2. Every slot has capacity ≥ 1 and a well-formed time range
/// 3. No empty class item IDs, no duplicate class item IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(slots: &[Slot], class_items: &[ClassItem]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut slot_ids = HashSet::new();
    for slot in slots {
        if slot.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Slot in {} on {} has an empty ID", slot.room, slot.key()),
            ));
        } else if !slot_ids.insert(slot.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlotId,
                format!("Duplicate slot ID: {}", slot.id),
            ));
        }

        if slot.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Slot '{}' has zero capacity", slot.id),
            ));
        }

        if !slot.time.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Slot '{}' has an invalid time range ({}..{} min)",
                    slot.id, slot.time.start_min, slot.time.end_min
                ),
            ));
        }
    }

    let mut item_ids = HashSet::new();
    for item in class_items {
        if item.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Class item '{}' has an empty ID", item.subject),
            ));
        } else if !item_ids.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateClassItemId,
                format!("Duplicate class item ID: {}", item.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that every class item appears at most once across the pool and
/// the assignment table.
pub fn validate_state(pool: &[ClassItem], table: &AssignmentTable) -> ValidationResult {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    let pooled = pool.iter().map(|item| (item, None));
    let placed = table.iter().map(|(slot_id, item)| (item, Some(slot_id)));

    for (item, slot_id) in pooled.chain(placed) {
        if !seen.insert(item.id.as_str()) {
            let location = match slot_id {
                Some(slot_id) => format!("slot '{slot_id}'"),
                None => "the unplaced pool".to_string(),
            };
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateClassItemId,
                format!("Class item '{}' appears again in {location}", item.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
