//! Class item model.
//!
//! A class item is a single teachable session: one subject, one instructor,
//! a student head-count, and a duration. It occupies exactly one slot once
//! placed.
//!
//! Session type and display category are presentational. Conflict checks
//! never read them, so they are closed enums rather than free text.

use serde::{Deserialize, Serialize};

/// A schedulable unit of teaching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassItem {
    /// Unique class item identifier.
    pub id: String,
    /// Subject name (e.g., "Advanced Calculus").
    pub subject: String,
    /// Instructor name; the key for instructor double-booking checks.
    pub instructor: String,
    /// Session length in minutes.
    pub duration_min: u32,
    /// Number of enrolled students; checked against slot capacity.
    pub students: u32,
    /// Kind of session.
    pub session_type: SessionType,
    /// Display category (calendar colour).
    pub category: Category,
}

/// Kind of teaching session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    Lecture,
    Lab,
    Tutorial,
}

/// Display category of a class item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Math,
    Science,
    English,
    History,
    Art,
    /// Physical education.
    Pe,
}

impl ClassItem {
    /// Creates a lecture with no students and a 90-minute duration.
    pub fn new(
        id: impl Into<String>,
        subject: impl Into<String>,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            instructor: instructor.into(),
            duration_min: 90,
            students: 0,
            session_type: SessionType::default(),
            category: Category::default(),
        }
    }

    /// Sets the student count.
    pub fn with_students(mut self, students: u32) -> Self {
        self.students = students;
        self
    }

    /// Sets the duration in minutes.
    pub fn with_duration(mut self, duration_min: u32) -> Self {
        self.duration_min = duration_min;
        self
    }

    /// Sets the session type.
    pub fn with_session_type(mut self, session_type: SessionType) -> Self {
        self.session_type = session_type;
        self
    }

    /// Sets the display category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_item_builder() {
        let item = ClassItem::new("C1", "Quantum Physics", "Prof. Johnson")
            .with_students(18)
            .with_duration(120)
            .with_session_type(SessionType::Lab)
            .with_category(Category::Science);

        assert_eq!(item.id, "C1");
        assert_eq!(item.subject, "Quantum Physics");
        assert_eq!(item.instructor, "Prof. Johnson");
        assert_eq!(item.students, 18);
        assert_eq!(item.duration_min, 120);
        assert_eq!(item.session_type, SessionType::Lab);
        assert_eq!(item.category, Category::Science);
    }

    #[test]
    fn test_class_item_defaults() {
        let item = ClassItem::new("C1", "Art", "Ms. Taylor");
        assert_eq!(item.students, 0);
        assert_eq!(item.duration_min, 90);
        assert_eq!(item.session_type, SessionType::Lecture);
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        let item = ClassItem::new("C6", "Team Sports", "Coach Brown").with_category(Category::Pe);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["category"], "pe");
        assert_eq!(json["session_type"], "lecture");
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{"id":"C1","subject":"S","instructor":"I","duration_min":60,
            "students":10,"session_type":"seminar","category":"math"}"#;
        assert!(serde_json::from_str::<ClassItem>(json).is_err());
    }
}
