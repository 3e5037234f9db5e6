//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Tunable behavior of a timetable session.
///
/// Every field has a default, so `{}` is a valid configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// What happens to an item displaced by `place` or `move_item`.
    pub placement_policy: PlacementPolicy,
}

/// Policy for placing onto an occupied slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// The new item takes the slot and the previous occupant leaves the
    /// session entirely: it is handed back to the caller but sits in neither
    /// the pool nor any slot.
    #[default]
    Overwrite,
    /// The new item takes the slot and the previous occupant is appended
    /// to the unplaced pool.
    ReturnToPool,
    /// Placing onto an occupied slot is ignored.
    Reject,
}

impl SessionConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placement policy.
    pub fn with_placement_policy(mut self, policy: PlacementPolicy) -> Self {
        self.placement_policy = policy;
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }
}
