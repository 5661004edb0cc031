use std::{fmt, str::FromStr};
use thiserror::Error;
use time::{Date, PrimitiveDateTime, Time};

/// A one-hour booking unit, identified by its start time label `HH:00`.
///
/// Slots always start at a full hour so that two distinct
/// slots of the same court never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    hour: u8,
}

impl Slot {
    pub fn new(hour: u8, minute: u8) -> Result<Self, SlotParseError> {
        if hour > 23 || minute != 0 {
            return Err(SlotParseError);
        }
        Ok(Self { hour })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// The start of the slot on the given day.
    pub fn start_hour_on(self, date: Date) -> PrimitiveDateTime {
        let time = Time::from_hms(self.hour, 0, 0).unwrap_or(Time::MIDNIGHT);
        PrimitiveDateTime::new(date, time)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid time slot (expected a full hour HH:00)")]
pub struct SlotParseError;

impl FromStr for Slot {
    type Err = SlotParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s.trim().split_once(':').ok_or(SlotParseError)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(SlotParseError);
        }
        let hour = h.parse::<u8>().map_err(|_| SlotParseError)?;
        let minute = m.parse::<u8>().map_err(|_| SlotParseError)?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:00", self.hour)
    }
}

/// Sorts the slots and removes duplicates.
pub fn normalize_slots(mut slots: Vec<Slot>) -> Vec<Slot> {
    slots.sort_unstable();
    slots.dedup();
    slots
}

/// Parses, sorts and deduplicates slot labels.
pub fn parse_slots<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Slot>, SlotParseError> {
    let slots = labels
        .iter()
        .map(|l| l.as_ref().parse::<Slot>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(normalize_slots(slots))
}
