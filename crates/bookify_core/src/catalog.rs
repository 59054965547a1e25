// --- File: crates/bookify_core/src/catalog.rs ---
//! The configured catalog of candidate booking slots.
//!
//! The catalog is immutable once constructed; weekday-specific slot
//! lists are a constructor-time concern, never a runtime mutation.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc,
             Weekday};
use chrono_tz::Tz;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::interval::BusyInterval;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse slot time: {0}")]
    TimeParseError(String),
    #[error("slot duration must be positive, got {0} minutes")]
    InvalidDuration(i64),
}

/// A candidate booking start time, identical across days unless the
/// catalog carries a weekday override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    /// Display form of the clock time, e.g. "10:00".
    label: String,
    /// Start-of-day-relative offset.
    start: NaiveTime,
}

impl TimeSlot {
    /// Parses a slot from its "HH:MM" display form.
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        let start = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|e| CatalogError::TimeParseError(format!("{}: {}", s, e)))?;
        Ok(Self {
            label: s.to_string(),
            start,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }
}

/// Static configuration of candidate slots for a bookable day.
#[derive(Debug, Clone)]
pub struct SlotCatalog {
    slots: Vec<TimeSlot>,
    weekday_overrides: HashMap<Weekday, Vec<TimeSlot>>,
    slot_duration: Duration,
    limited_threshold: usize,
    time_zone: Tz,
}

impl SlotCatalog {
    /// Builds a catalog from "HH:MM" slot times. Slots are sorted
    /// chronologically regardless of input order.
    pub fn new<S: AsRef<str>>(
        slot_times: &[S],
        slot_duration_minutes: i64,
        limited_threshold: usize,
        time_zone: Tz,
    ) -> Result<Self, CatalogError> {
        if slot_duration_minutes <= 0 {
            return Err(CatalogError::InvalidDuration(slot_duration_minutes));
        }
        let mut slots = slot_times
            .iter()
            .map(|s| TimeSlot::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        slots.sort_by_key(|slot| slot.start);
        Ok(Self {
            slots,
            weekday_overrides: HashMap::new(),
            slot_duration: Duration::minutes(slot_duration_minutes),
            limited_threshold,
            time_zone,
        })
    }

    /// Replaces the slot list for one weekday. Extension point for
    /// per-weekday schedules; the default configuration does not use it.
    pub fn with_weekday_override<S: AsRef<str>>(
        mut self,
        weekday: Weekday,
        slot_times: &[S],
    ) -> Result<Self, CatalogError> {
        let mut slots = slot_times
            .iter()
            .map(|s| TimeSlot::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        slots.sort_by_key(|slot| slot.start);
        self.weekday_overrides.insert(weekday, slots);
        Ok(self)
    }

    /// The candidate slots for `date`, in chronological order.
    pub fn slots_for(&self, date: NaiveDate) -> &[TimeSlot] {
        self.weekday_overrides
            .get(&date.weekday())
            .map(Vec::as_slice)
            .unwrap_or(&self.slots)
    }

    /// The candidate slots for `date` minus those whose `[t, t+D)`
    /// range intersects any busy interval. Touching endpoints do not
    /// exclude a slot. Filtering is idempotent: re-filtering the
    /// survivors against the same busy set changes nothing.
    pub fn offerable_slots(&self, date: NaiveDate, busy: &[BusyInterval]) -> Vec<TimeSlot> {
        self.slots_for(date)
            .iter()
            .filter(|slot| match self.slot_bounds(date, slot) {
                Some((start, end)) => !busy.iter().any(|b| b.overlaps(start, end)),
                // Local times skipped by a DST transition cannot be offered.
                None => false,
            })
            .cloned()
            .collect()
    }

    /// The absolute `[start, end)` instants of `slot` anchored on
    /// `date` in the catalog's time zone. `None` when the local time
    /// does not exist on that date.
    pub fn slot_bounds(
        &self,
        date: NaiveDate,
        slot: &TimeSlot,
    ) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let local = date.and_time(slot.start);
        let start = match self.time_zone.from_local_datetime(&local) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => return None,
        }
        .with_timezone(&Utc);
        Some((start, start + self.slot_duration))
    }

    pub fn slot_duration(&self) -> Duration {
        self.slot_duration
    }

    /// Free-slot count at or below which a day is shown as Limited.
    pub fn limited_threshold(&self) -> usize {
        self.limited_threshold
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }
}
