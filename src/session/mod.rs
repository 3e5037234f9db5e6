//! Timetable session: the mutation engine.
//!
//! A session owns the unplaced pool and the assignment table for one
//! timetabling run, together with the fixed slot catalog. Every applied
//! mutation rebuilds the conflict set from scratch before returning.
//!
//! # Operations
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`place`](TimetableSession::place) | pool → slot |
//! | [`unplace`](TimetableSession::unplace) | slot → end of pool |
//! | [`move_item`](TimetableSession::move_item) | slot → slot |
//! | [`clear_all`](TimetableSession::clear_all) | empty every slot (items are discarded) |
//!
//! References to unknown class items or slots are ignored: the call
//! returns [`MutationOutcome::Ignored`] and no state changes.
//!
//! # Concurrency
//! Mutations take `&mut self`, so at most one runs at a time. Hosts with
//! several writers wrap the session in a `Mutex`.

mod command;
mod config;
mod outcome;

pub use command::SessionCommand;
pub use config::{PlacementPolicy, SessionConfig};
pub use outcome::{IgnoreReason, MutationOutcome};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::conflicts::detect_conflicts;
use crate::error::SessionError;
use crate::kpi::TimetableKpi;
use crate::models::{AssignmentTable, ClassItem, Conflict, Slot, SlotCatalog, Weekday};
use crate::validation::{validate_input, validate_state};

/// Session-start payload supplied by collaborators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Slot catalog, in display order.
    pub slots: Vec<Slot>,
    /// Initial unplaced pool, in display order.
    pub class_items: Vec<ClassItem>,
    /// Session behavior.
    #[serde(default)]
    pub config: SessionConfig,
}

impl SessionRequest {
    /// Creates a request with the default configuration.
    pub fn new(slots: Vec<Slot>, class_items: Vec<ClassItem>) -> Self {
        Self {
            slots,
            class_items,
            config: SessionConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Where a class item currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<'a> {
    /// In the unplaced pool at this position.
    Unplaced(usize),
    /// Occupying this slot.
    Placed(&'a str),
}

/// Scheduling state for one timetabling session.
///
/// # Example
///
/// ```
/// use u_timetable::models::{ClassItem, Slot, Weekday};
/// use u_timetable::session::TimetableSession;
///
/// let slots = vec![
///     Slot::new("S1", Weekday::Monday, "09:00-10:30".parse().unwrap(), "Room 101", 30),
///     Slot::new("S2", Weekday::Monday, "09:00-10:30".parse().unwrap(), "Lab 205", 30),
/// ];
/// let items = vec![
///     ClassItem::new("C1", "Advanced Calculus", "Dr. Smith").with_students(25),
///     ClassItem::new("C2", "Linear Algebra", "Dr. Smith").with_students(20),
/// ];
///
/// let mut session = TimetableSession::new(slots, items).unwrap();
/// session.place("C1", "S1");
/// session.place("C2", "S2");
///
/// assert!(session.unplaced().is_empty());
/// assert_eq!(session.conflicts().len(), 1);
/// assert!(session.conflicts()[0].involves("C2"));
/// ```
#[derive(Debug, Clone)]
pub struct TimetableSession {
    config: SessionConfig,
    catalog: SlotCatalog,
    pool: Vec<ClassItem>,
    table: AssignmentTable,
    conflicts: Vec<Conflict>,
    revision: u64,
}

impl TimetableSession {
    /// Opens a session with the default configuration.
    ///
    /// Fails if the slots or class items do not pass
    /// [`validate_input`].
    pub fn new(slots: Vec<Slot>, class_items: Vec<ClassItem>) -> Result<Self, SessionError> {
        Self::open(SessionRequest::new(slots, class_items))
    }

    /// Opens a session from a collaborator request.
    pub fn open(request: SessionRequest) -> Result<Self, SessionError> {
        validate_input(&request.slots, &request.class_items).map_err(SessionError::InvalidInput)?;

        info!(
            slots = request.slots.len(),
            class_items = request.class_items.len(),
            policy = ?request.config.placement_policy,
            "timetable session opened"
        );

        Ok(Self {
            config: request.config,
            catalog: SlotCatalog::new(request.slots),
            pool: request.class_items,
            table: AssignmentTable::new(),
            conflicts: Vec::new(),
            revision: 0,
        })
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    // ======================== Mutations ========================

    /// Places an unplaced class item into a slot.
    ///
    /// If the slot is occupied, the [`PlacementPolicy`] decides the fate of
    /// the previous occupant.
    #[instrument(level = "debug", skip(self))]
    pub fn place(&mut self, class_item_id: &str, slot_id: &str) -> MutationOutcome {
        if !self.catalog.contains(slot_id) {
            return self.skip(IgnoreReason::UnknownSlot(slot_id.to_string()));
        }
        let Some(pos) = self.pool.iter().position(|item| item.id == class_item_id) else {
            return self.skip(IgnoreReason::UnknownClassItem(class_item_id.to_string()));
        };
        if self.rejects(slot_id) {
            return self.skip(IgnoreReason::SlotOccupied(slot_id.to_string()));
        }

        let item = self.pool.remove(pos);
        let displaced = self.table.insert(slot_id, item);
        self.commit(displaced)
    }

    /// Returns a slot's class item to the end of the unplaced pool.
    #[instrument(level = "debug", skip(self))]
    pub fn unplace(&mut self, slot_id: &str) -> MutationOutcome {
        if !self.catalog.contains(slot_id) {
            return self.skip(IgnoreReason::UnknownSlot(slot_id.to_string()));
        }
        let Some(item) = self.table.remove(slot_id) else {
            return self.skip(IgnoreReason::EmptySlot(slot_id.to_string()));
        };

        self.pool.push(item);
        self.commit(None)
    }

    /// Moves a class item from one slot to another.
    ///
    /// If the target is occupied, the [`PlacementPolicy`] decides the fate
    /// of its occupant. Moving a slot onto itself is ignored.
    #[instrument(level = "debug", skip(self))]
    pub fn move_item(&mut self, source_slot_id: &str, target_slot_id: &str) -> MutationOutcome {
        if source_slot_id == target_slot_id {
            return self.skip(IgnoreReason::SameSlot(source_slot_id.to_string()));
        }
        for slot_id in [source_slot_id, target_slot_id] {
            if !self.catalog.contains(slot_id) {
                return self.skip(IgnoreReason::UnknownSlot(slot_id.to_string()));
            }
        }
        if !self.table.is_occupied(source_slot_id) {
            return self.skip(IgnoreReason::EmptySlot(source_slot_id.to_string()));
        }
        if self.rejects(target_slot_id) {
            return self.skip(IgnoreReason::SlotOccupied(target_slot_id.to_string()));
        }

        let Some(item) = self.table.remove(source_slot_id) else {
            return self.skip(IgnoreReason::EmptySlot(source_slot_id.to_string()));
        };
        let displaced = self.table.insert(target_slot_id, item);
        self.commit(displaced)
    }

    /// Empties every slot. Removed items are discarded, not returned to
    /// the pool.
    #[instrument(level = "debug", skip(self))]
    pub fn clear_all(&mut self) -> MutationOutcome {
        let discarded = self.table.clear();
        self.refresh();
        debug!(
            discarded = discarded.len(),
            revision = self.revision,
            "assignment table cleared"
        );
        MutationOutcome::Cleared { discarded }
    }

    /// Applies a collaborator command.
    pub fn apply(&mut self, command: &SessionCommand) -> MutationOutcome {
        match command {
            SessionCommand::Place {
                class_item_id,
                slot_id,
            } => self.place(class_item_id, slot_id),
            SessionCommand::Unplace { slot_id } => self.unplace(slot_id),
            SessionCommand::Move {
                source_slot_id,
                target_slot_id,
            } => self.move_item(source_slot_id, target_slot_id),
            SessionCommand::ClearAll => self.clear_all(),
        }
    }

    fn rejects(&self, target_slot_id: &str) -> bool {
        self.config.placement_policy == PlacementPolicy::Reject
            && self.table.is_occupied(target_slot_id)
    }

    fn commit(&mut self, displaced: Option<ClassItem>) -> MutationOutcome {
        if let Some(item) = &displaced {
            match self.config.placement_policy {
                PlacementPolicy::ReturnToPool => self.pool.push(item.clone()),
                PlacementPolicy::Overwrite => {
                    debug!(class_item_id = %item.id, "displaced class item dropped from session");
                }
                // Occupied targets never reach commit under Reject.
                PlacementPolicy::Reject => {}
            }
        }
        self.refresh();
        debug!(
            revision = self.revision,
            placed = self.table.len(),
            unplaced = self.pool.len(),
            conflicts = self.conflicts.len(),
            "mutation applied"
        );
        MutationOutcome::Applied { displaced }
    }

    fn refresh(&mut self) {
        self.conflicts = detect_conflicts(&self.table, &self.catalog);
        self.revision += 1;
        debug_assert!(
            validate_state(&self.pool, &self.table).is_ok(),
            "class item appears in more than one location"
        );
    }

    fn skip(&self, reason: IgnoreReason) -> MutationOutcome {
        debug!(%reason, "mutation ignored");
        MutationOutcome::ignored(reason)
    }

    // ======================== Accessors ========================

    /// Unplaced class items, in pool order.
    pub fn unplaced(&self) -> &[ClassItem] {
        &self.pool
    }

    /// Current slot → class item mapping.
    pub fn assignments(&self) -> &AssignmentTable {
        &self.table
    }

    /// Conflicts in the current assignment.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// The slot catalog.
    pub fn catalog(&self) -> &SlotCatalog {
        &self.catalog
    }

    /// Active configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of applied mutations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether any conflict is present.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Finds a class item in the pool or the table.
    pub fn locate(&self, class_item_id: &str) -> Option<Location<'_>> {
        if let Some(pos) = self.pool.iter().position(|item| item.id == class_item_id) {
            return Some(Location::Unplaced(pos));
        }
        self.table.slot_of(class_item_id).map(Location::Placed)
    }

    /// Conflicts flagging a class item.
    pub fn conflicts_for_item(&self, class_item_id: &str) -> Vec<&Conflict> {
        self.conflicts
            .iter()
            .filter(|c| c.involves(class_item_id))
            .collect()
    }

    /// Placements on a day, in ascending slot-ID order.
    pub fn assignments_for_day(&self, day: Weekday) -> Vec<(&Slot, &ClassItem)> {
        self.placements().filter(|(slot, _)| slot.day == day).collect()
    }

    /// Placements in a room, in ascending slot-ID order.
    pub fn assignments_for_room(&self, room: &str) -> Vec<(&Slot, &ClassItem)> {
        self.placements().filter(|(slot, _)| slot.room == room).collect()
    }

    /// Placements taught by an instructor, in ascending slot-ID order.
    pub fn assignments_for_instructor(&self, instructor: &str) -> Vec<(&Slot, &ClassItem)> {
        self.placements()
            .filter(|(_, item)| item.instructor == instructor)
            .collect()
    }

    /// Occupancy and conflict metrics for the current state.
    pub fn kpi(&self) -> TimetableKpi {
        TimetableKpi::calculate(&self.catalog, &self.table, &self.pool, &self.conflicts)
    }

    fn placements(&self) -> impl Iterator<Item = (&Slot, &ClassItem)> {
        self.table
            .iter()
            .filter_map(move |(slot_id, item)| self.catalog.get(slot_id).map(|slot| (slot, item)))
    }
}
