// --- File: crates/bookify_core/src/source.rs ---
//! External collaborator contract for fetching busy intervals.

use bookify_common::BoxFuture;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::interval::BusyInterval;

#[derive(Error, Debug)]
pub enum SourceError {
    /// Transient failure reaching the provider. The caller may retry
    /// or degrade to a default view; the core imposes no retry policy.
    #[error("busy-interval source unavailable: {0}")]
    Unavailable(String),
    /// The provider returned data that could not be reduced to valid
    /// busy intervals. The one catastrophic case, surfaced upstream as
    /// a generic failure.
    #[error("malformed provider payload: {0}")]
    MalformedPayload(String),
}

/// Outcome of a busy-interval fetch.
///
/// `NotConfigured` is a value, not an error: absent credentials must
/// not crash the caller, but they must also stay distinguishable from
/// a configured calendar with zero busy intervals. Downstream layers
/// choose how to degrade; the resolver never defaults silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusyFeed {
    Ready(Vec<BusyInterval>),
    NotConfigured,
}

/// A source of busy intervals for a date range, typically backed by a
/// calendar provider over the network.
pub trait BusyIntervalSource: Send + Sync {
    /// Fetches the busy intervals overlapping `[range_start, range_end)`.
    ///
    /// For a month view the requested range must cover the full
    /// week-aligned grid, not just the in-month dates, so spill-over
    /// days could in principle be resolved as well.
    fn fetch_busy_intervals(
        &self,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> BoxFuture<'_, BusyFeed, SourceError>;
}
