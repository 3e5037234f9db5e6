//! Timetable domain models.
//!
//! Provides the data types of a class-timetabling session: what is being
//! placed, where it can go, the current placement, and the conflicts it
//! produces.
//!
//! # Domain Mappings
//!
//! | u-timetable | u-schedule | Meaning |
//! |-------------|------------|---------|
//! | ClassItem | Activity | One teachable session |
//! | Slot | Resource × TimeWindow | Room at a day and time |
//! | AssignmentTable | Schedule | Current placement |
//! | Conflict | Violation | Rule broken by the placement |

mod catalog;
mod class_item;
mod conflict;
mod slot;
mod table;

pub use catalog::SlotCatalog;
pub use class_item::{Category, ClassItem, SessionType};
pub use conflict::{Conflict, ConflictKind, ConflictRule};
pub use slot::{Slot, SlotKey, TimeRange, Weekday, MINUTES_PER_DAY};
pub use table::AssignmentTable;
