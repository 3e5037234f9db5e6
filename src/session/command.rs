//! Move descriptions submitted by the presentation layer.
//!
//! A drag gesture ends with one of these commands. The UI maps its own
//! source and destination representations onto class item and slot IDs;
//! the session knows nothing about presentation.

use serde::{Deserialize, Serialize};

/// A single structural change requested by a collaborator.
///
/// Serialized with an `op` tag, e.g.
/// `{"op":"move","source_slot_id":"S1","target_slot_id":"S2"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionCommand {
    /// Pool → slot.
    Place {
        class_item_id: String,
        slot_id: String,
    },
    /// Slot → pool.
    Unplace { slot_id: String },
    /// Slot → slot.
    Move {
        source_slot_id: String,
        target_slot_id: String,
    },
    /// Empty every slot.
    ClearAll,
}

impl SessionCommand {
    /// Creates a place command.
    pub fn place(class_item_id: impl Into<String>, slot_id: impl Into<String>) -> Self {
        SessionCommand::Place {
            class_item_id: class_item_id.into(),
            slot_id: slot_id.into(),
        }
    }

    /// Creates an unplace command.
    pub fn unplace(slot_id: impl Into<String>) -> Self {
        SessionCommand::Unplace {
            slot_id: slot_id.into(),
        }
    }

    /// Creates a slot-to-slot move command.
    pub fn move_item(source_slot_id: impl Into<String>, target_slot_id: impl Into<String>) -> Self {
        SessionCommand::Move {
            source_slot_id: source_slot_id.into(),
            target_slot_id: target_slot_id.into(),
        }
    }

    /// Parses a command from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
