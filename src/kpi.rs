//! Timetable quality metrics (KPIs).
//!
//! Summarizes how full a timetable is and how many conflicts it carries.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slot Utilization | occupied slots / catalog slots |
//! | Seat Utilization | Σ students / Σ capacity, over occupied slots |
//! | Room Occupancy | occupied slots per room |
//! | Conflicts by Rule | conflict count per violated rule |
//!
//! Seat utilization exceeds 1.0 when rooms are overfilled.

use std::collections::HashMap;

use crate::conflicts::count_by_rule;
use crate::models::{AssignmentTable, ClassItem, Conflict, ConflictRule, SlotCatalog};

/// Timetable performance indicators.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Slots in the catalog.
    pub total_slots: usize,
    /// Slots holding a class item.
    pub occupied_slots: usize,
    /// Class items awaiting placement.
    pub unplaced_count: usize,
    /// Fraction of slots occupied (0.0..1.0).
    pub slot_utilization: f64,
    /// Seats taken over seats offered in occupied slots.
    pub seat_utilization: f64,
    /// Occupied slots per room.
    pub occupancy_by_room: HashMap<String, usize>,
    /// Conflicts per rule.
    pub conflicts_by_rule: HashMap<ConflictRule, usize>,
    /// Total conflicts.
    pub total_conflicts: usize,
}

impl TimetableKpi {
    /// Computes KPIs for a timetable snapshot.
    pub fn calculate(
        catalog: &SlotCatalog,
        table: &AssignmentTable,
        pool: &[ClassItem],
        conflicts: &[Conflict],
    ) -> Self {
        let mut occupancy_by_room: HashMap<String, usize> = HashMap::new();
        let mut students: u64 = 0;
        let mut seats: u64 = 0;
        let mut occupied: usize = 0;

        for (slot_id, item) in table {
            let Some(slot) = catalog.get(slot_id) else {
                continue;
            };
            occupied += 1;
            students += u64::from(item.students);
            seats += u64::from(slot.capacity);
            *occupancy_by_room.entry(slot.room.clone()).or_insert(0) += 1;
        }

        let total_slots = catalog.len();
        let slot_utilization = if total_slots == 0 {
            0.0
        } else {
            occupied as f64 / total_slots as f64
        };
        let seat_utilization = if seats == 0 {
            0.0
        } else {
            students as f64 / seats as f64
        };

        Self {
            total_slots,
            occupied_slots: occupied,
            unplaced_count: pool.len(),
            slot_utilization,
            seat_utilization,
            occupancy_by_room,
            conflicts_by_rule: count_by_rule(conflicts),
            total_conflicts: conflicts.len(),
        }
    }

    /// Whether the timetable has no conflicts.
    pub fn is_conflict_free(&self) -> bool {
        self.total_conflicts == 0
    }

    /// Conflict count for one rule.
    pub fn conflicts_for(&self, rule: ConflictRule) -> usize {
        self.conflicts_by_rule.get(&rule).copied().unwrap_or(0)
    }

    /// Whether the timetable is conflict-free and at least
    /// `min_utilization` of its slots are filled.
    pub fn meets_thresholds(&self, min_utilization: f64) -> bool {
        self.is_conflict_free() && self.slot_utilization >= min_utilization
    }

    /// One-line status message.
    pub fn summary(&self) -> String {
        match self.total_conflicts {
            0 => "Timetable has no conflicts".to_string(),
            1 => "Timetable has 1 conflict".to_string(),
            n => format!("Timetable has {n} conflicts"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflicts::detect_conflicts;
    use crate::models::{Slot, TimeRange, Weekday};

    fn sample_catalog() -> SlotCatalog {
        let t: TimeRange = "09:00-10:30".parse().unwrap();
        let u: TimeRange = "11:00-12:30".parse().unwrap();
        SlotCatalog::new(vec![
            Slot::new("S1", Weekday::Monday, t, "Room 101", 40),
            Slot::new("S2", Weekday::Monday, u, "Room 101", 40),
            Slot::new("S3", Weekday::Monday, t, "Lab 205", 20),
            Slot::new("S4", Weekday::Tuesday, t, "Lab 205", 20),
        ])
    }

    #[test]
    fn test_kpi_basic() {
        let catalog = sample_catalog();
        let mut table = AssignmentTable::new();
        table.insert("S1", ClassItem::new("C1", "Calculus", "Dr. Smith").with_students(30));
        table.insert("S3", ClassItem::new("C2", "Physics", "Prof. Johnson").with_students(10));
        let pool = vec![ClassItem::new("C3", "Art", "Ms. Taylor")];
        let conflicts = detect_conflicts(&table, &catalog);

        let kpi = TimetableKpi::calculate(&catalog, &table, &pool, &conflicts);
        assert_eq!(kpi.total_slots, 4);
        assert_eq!(kpi.occupied_slots, 2);
        assert_eq!(kpi.unplaced_count, 1);
        assert!((kpi.slot_utilization - 0.5).abs() < 1e-10);
        // 40 students over 60 seats
        assert!((kpi.seat_utilization - 40.0 / 60.0).abs() < 1e-10);
        assert_eq!(kpi.occupancy_by_room["Room 101"], 1);
        assert_eq!(kpi.occupancy_by_room["Lab 205"], 1);
        assert!(kpi.is_conflict_free());
        assert_eq!(kpi.summary(), "Timetable has no conflicts");
        assert!(kpi.meets_thresholds(0.5));
        assert!(!kpi.meets_thresholds(0.75));
    }

    #[test]
    fn test_kpi_with_conflicts() {
        let catalog = sample_catalog();
        let mut table = AssignmentTable::new();
        table.insert("S1", ClassItem::new("C1", "Calculus", "Dr. Smith").with_students(35));
        table.insert("S3", ClassItem::new("C2", "Algebra", "Dr. Smith").with_students(30));
        let conflicts = detect_conflicts(&table, &catalog);

        let kpi = TimetableKpi::calculate(&catalog, &table, &[], &conflicts);
        assert_eq!(kpi.total_conflicts, 2);
        assert_eq!(kpi.conflicts_for(ConflictRule::InstructorDoubleBooking), 1);
        assert_eq!(kpi.conflicts_for(ConflictRule::CapacityOverflow), 1);
        assert_eq!(kpi.conflicts_for(ConflictRule::RoomDoubleBooking), 0);
        assert!(kpi.seat_utilization > 1.0);
        assert_eq!(kpi.summary(), "Timetable has 2 conflicts");
        assert!(!kpi.meets_thresholds(0.0));
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = TimetableKpi::calculate(&SlotCatalog::default(), &AssignmentTable::new(), &[], &[]);
        assert_eq!(kpi.slot_utilization, 0.0);
        assert_eq!(kpi.seat_utilization, 0.0);
        assert!(kpi.occupancy_by_room.is_empty());
        assert!(kpi.is_conflict_free());
    }
}
