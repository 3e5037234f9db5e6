//! Slot model.
//!
//! A slot is a bookable (day, time range, room) triple with a seat
//! capacity. Slots come from the catalog supplied at session start and
//! are never created or destroyed afterwards.
//!
//! # Time Model
//! Times of day are minutes after midnight. A [`TimeRange`] is the
//! half-open interval `[start, end)`, written `HH:MM-HH:MM`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Minutes in a day; the latest valid range end (`24:00`).
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A bookable (day, time range, room) unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Unique slot identifier.
    pub id: String,
    /// Day of the week.
    pub day: Weekday,
    /// Time of day covered by this slot.
    pub time: TimeRange,
    /// Room name.
    pub room: String,
    /// Maximum number of students the room holds.
    pub capacity: u32,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(
        id: impl Into<String>,
        day: Weekday,
        time: TimeRange,
        room: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            day,
            time,
            room: room.into(),
            capacity,
        }
    }

    /// The (day, time) key used for double-booking checks.
    #[inline]
    pub fn key(&self) -> SlotKey {
        SlotKey {
            day: self.day,
            time: self.time,
        }
    }

    /// Whether `students` fit in this slot's room.
    #[inline]
    pub fn fits(&self, students: u32) -> bool {
        students <= self.capacity
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Full English name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    /// Accepts full names and three-letter abbreviations, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|d| {
                let name = d.name().to_ascii_lowercase();
                lower == name || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| ParseError::InvalidWeekday(s.to_string()))
    }
}

/// A time-of-day interval `[start, end)` in minutes after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start (minutes after midnight, inclusive).
    pub start_min: u16,
    /// End (minutes after midnight, exclusive).
    pub end_min: u16,
}

impl TimeRange {
    /// Creates a range from minute offsets.
    ///
    /// Fails if `start_min >= end_min` or the range runs past midnight.
    pub fn new(start_min: u16, end_min: u16) -> Result<Self, ParseError> {
        if start_min >= end_min || end_min > MINUTES_PER_DAY {
            return Err(ParseError::InvalidTimeRange(format!(
                "{}-{}",
                format_hhmm(start_min),
                format_hhmm(end_min)
            )));
        }
        Ok(Self { start_min, end_min })
    }

    /// Creates a range from hour/minute pairs.
    ///
    /// Hours run 0-24 and minutes 0-59; `24:00` is the only valid time in
    /// hour 24.
    pub fn from_hm(start: (u16, u16), end: (u16, u16)) -> Result<Self, ParseError> {
        let to_min = |(h, m): (u16, u16)| {
            minute_of_day(h, m).ok_or_else(|| ParseError::InvalidTime(format!("{h:02}:{m:02}")))
        };
        Self::new(to_min(start)?, to_min(end)?)
    }

    /// Length of the range in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min - self.start_min
    }

    /// Whether this range is invariant-respecting.
    ///
    /// Deserialized ranges bypass [`TimeRange::new`], so validation
    /// re-checks them.
    pub fn is_well_formed(&self) -> bool {
        self.start_min < self.end_min && self.end_min <= MINUTES_PER_DAY
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_hhmm(self.start_min),
            format_hhmm(self.end_min)
        )
    }
}

impl FromStr for TimeRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| ParseError::InvalidTimeRange(s.to_string()))?;
        let start = parse_hhmm(start)?;
        let end = parse_hhmm(end)?;
        Self::new(start, end).map_err(|_| ParseError::InvalidTimeRange(s.to_string()))
    }
}

/// The (day, time range) pair two slots must share to clash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub day: Weekday,
    pub time: TimeRange,
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

/// Minutes after midnight, or `None` outside `00:00..=24:00`.
fn minute_of_day(h: u16, m: u16) -> Option<u16> {
    if m >= 60 || h > 24 || (h == 24 && m != 0) {
        return None;
    }
    Some(h * 60 + m)
}

/// Parses strict `HH:MM` (two ASCII digits each side).
fn parse_hhmm(s: &str) -> Result<u16, ParseError> {
    let invalid = || ParseError::InvalidTime(s.to_string());
    let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(h) || !two_digits(m) {
        return Err(invalid());
    }
    let h: u16 = h.parse().map_err(|_| invalid())?;
    let m: u16 = m.parse().map_err(|_| invalid())?;
    minute_of_day(h, m).ok_or_else(invalid)
}

fn format_hhmm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_parse_and_display() {
        let r: TimeRange = "09:00-10:30".parse().unwrap();
        assert_eq!(r.start_min, 540);
        assert_eq!(r.end_min, 630);
        assert_eq!(r.duration_min(), 90);
        assert_eq!(r.to_string(), "09:00-10:30");
    }

    #[test]
    fn test_time_range_rejects_inverted() {
        assert!("10:30-09:00".parse::<TimeRange>().is_err());
        assert!("09:00-09:00".parse::<TimeRange>().is_err());
        assert!(TimeRange::new(600, 600).is_err());
        assert!(TimeRange::new(0, MINUTES_PER_DAY + 1).is_err());
    }

    #[test]
    fn test_time_range_rejects_garbage() {
        assert_eq!(
            "0900-1030".parse::<TimeRange>(),
            Err(ParseError::InvalidTime("0900".into()))
        );
        assert!("09:60-10:00".parse::<TimeRange>().is_err());
        assert!("nine-ten".parse::<TimeRange>().is_err());
        assert!("09:00".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_time_range_until_midnight() {
        let r: TimeRange = "22:00-24:00".parse().unwrap();
        assert_eq!(r.end_min, MINUTES_PER_DAY);
    }

    #[test]
    fn test_from_hm() {
        let r = TimeRange::from_hm((9, 0), (10, 30)).unwrap();
        assert_eq!(r, "09:00-10:30".parse().unwrap());
        assert_eq!(TimeRange::from_hm((22, 0), (24, 0)).unwrap().end_min, MINUTES_PER_DAY);
    }

    #[test]
    fn test_from_hm_rejects_out_of_range() {
        assert_eq!(
            TimeRange::from_hm((9, 75), (11, 0)),
            Err(ParseError::InvalidTime("09:75".into()))
        );
        // Large hours must not overflow the minute arithmetic.
        assert_eq!(
            TimeRange::from_hm((1100, 0), (1101, 0)),
            Err(ParseError::InvalidTime("1100:00".into()))
        );
        assert!(TimeRange::from_hm((9, 0), (25, 0)).is_err());
        assert!(TimeRange::from_hm((9, 0), (24, 30)).is_err());
    }

    #[test]
    fn test_time_range_requires_two_digit_fields() {
        assert_eq!(
            "+9:00-+10:00".parse::<TimeRange>(),
            Err(ParseError::InvalidTime("+9:00".into()))
        );
        assert_eq!(
            "9:5-10:0".parse::<TimeRange>(),
            Err(ParseError::InvalidTime("9:5".into()))
        );
        assert!("09:00-10:0".parse::<TimeRange>().is_err());
        assert!("09:00 - 10:30".parse::<TimeRange>().is_ok());
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("Monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("wed".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert_eq!(" FRIDAY ".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("Mo".parse::<Weekday>().is_err());
        assert!("Funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_slot_key_equality() {
        let t: TimeRange = "09:00-10:30".parse().unwrap();
        let a = Slot::new("S1", Weekday::Monday, t, "Room 101", 30);
        let b = Slot::new("S2", Weekday::Monday, t, "Lab 205", 20);
        let c = Slot::new("S3", Weekday::Tuesday, t, "Room 101", 30);
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
        assert_eq!(a.key().to_string(), "Monday 09:00-10:30");
    }

    #[test]
    fn test_slot_fits() {
        let t: TimeRange = "09:00-10:30".parse().unwrap();
        let s = Slot::new("S1", Weekday::Monday, t, "Room 101", 20);
        assert!(s.fits(20));
        assert!(!s.fits(21));
    }

    #[test]
    fn test_slot_serde() {
        let t: TimeRange = "14:00-15:30".parse().unwrap();
        let s = Slot::new("S1", Weekday::Friday, t, "Room 304", 25);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"day\":\"Friday\""));
        let back: Slot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
