//! Class timetabling engine for the U-Engine ecosystem.
//!
//! Assigns class items (teaching sessions) to fixed day/time/room slots and
//! reports conflicts as the assignment changes. Placement is driven from
//! outside, usually by a drag-and-drop timetable UI. This crate performs no
//! automatic search; it keeps the state consistent and recomputes the
//! conflicts after every change.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ClassItem`, `Slot`, `SlotCatalog`,
//!   `AssignmentTable`, `Conflict`
//! - **`session`**: `TimetableSession`, the mutation engine (place, unplace,
//!   move, clear) and its read accessors
//! - **`conflicts`**: Pure conflict detection (instructor/room double-booking,
//!   capacity overflow)
//! - **`validation`**: Input integrity checks and the exclusivity invariant
//! - **`kpi`**: Occupancy and conflict metrics
//!
//! # Architecture
//!
//! Single-owner, synchronous state. Every applied mutation runs to
//! completion, including the full conflict pass, before the next one can
//! start. Invalid references are ignored rather than reported as errors.

pub mod conflicts;
pub mod error;
pub mod kpi;
pub mod models;
pub mod session;
pub mod validation;

pub use error::{ParseError, SessionError};
pub use session::{MutationOutcome, SessionCommand, TimetableSession};
