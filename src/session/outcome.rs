//! Mutation outcomes.
//!
//! Malformed references are not errors: the mutation is skipped and the
//! caller gets `Ignored` with the reason. Skipped mutations change nothing,
//! not even the conflict set.

use serde::Serialize;
use std::fmt;

use crate::models::ClassItem;

/// Result of a mutation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MutationOutcome {
    /// The mutation changed the session and conflicts were recomputed.
    Applied {
        /// Previous occupant of the target slot, if any. Under
        /// [`PlacementPolicy::Overwrite`](super::PlacementPolicy::Overwrite)
        /// this item is no longer part of the session.
        displaced: Option<ClassItem>,
    },
    /// Every slot was emptied; the discarded items are not returned to the pool.
    Cleared {
        discarded: Vec<ClassItem>,
    },
    /// Nothing changed.
    Ignored {
        reason: IgnoreReason,
    },
}

/// Why a mutation was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "id", rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The class item is not in the unplaced pool.
    UnknownClassItem(String),
    /// The slot is not in the catalog.
    UnknownSlot(String),
    /// The source slot holds nothing.
    EmptySlot(String),
    /// Source and target are the same slot.
    SameSlot(String),
    /// The target is occupied and the policy is `Reject`.
    SlotOccupied(String),
}

impl MutationOutcome {
    pub(crate) fn ignored(reason: IgnoreReason) -> Self {
        MutationOutcome::Ignored { reason }
    }

    /// Whether the session changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MutationOutcome::Ignored { .. })
    }

    /// The skip reason, if ignored.
    pub fn ignore_reason(&self) -> Option<&IgnoreReason> {
        match self {
            MutationOutcome::Ignored { reason } => Some(reason),
            _ => None,
        }
    }

    /// Item displaced from the target slot, if any.
    pub fn displaced(&self) -> Option<&ClassItem> {
        match self {
            MutationOutcome::Applied { displaced } => displaced.as_ref(),
            _ => None,
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::UnknownClassItem(id) => write!(f, "class item '{id}' is not unplaced"),
            IgnoreReason::UnknownSlot(id) => write!(f, "slot '{id}' is not in the catalog"),
            IgnoreReason::EmptySlot(id) => write!(f, "slot '{id}' is empty"),
            IgnoreReason::SameSlot(id) => write!(f, "source and target are both '{id}'"),
            IgnoreReason::SlotOccupied(id) => write!(f, "slot '{id}' is occupied"),
        }
    }
}
