// --- File: crates/bookify_core/src/interval.rs ---
//! Busy intervals fetched from the calendar provider.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IntervalError {
    #[error("invalid busy interval: start {start} is after end {end}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// A half-open `[start, end)` time range during which no slot may be
/// offered. Validated at construction: malformed intervals are
/// rejected at the ingestion boundary, never reordered and never
/// allowed to reach tier computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusyInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl BusyInterval {
    /// Creates a busy interval, rejecting `start > end`.
    ///
    /// Zero-length intervals are accepted but degenerate: they overlap
    /// nothing and so never block a slot.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, IntervalError> {
        if start > end {
            return Err(IntervalError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// True for the degenerate zero-length interval.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Half-open intersection test against `[range_start, range_end)`.
    /// Touching endpoints do not count as overlap.
    pub fn overlaps(&self, range_start: DateTime<Utc>, range_end: DateTime<Utc>) -> bool {
        !self.is_empty() && self.start < range_end && range_start < self.end
    }
}
