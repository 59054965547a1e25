// --- File: crates/bookify_core/src/availability.rs ---
//! Availability tier resolution for a single day cell.

use serde::Serialize;

use crate::catalog::SlotCatalog;
use crate::grid::CalendarDay;
use crate::interval::BusyInterval;

/// Categorical bookability of a day, ordered by display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityTier {
    /// Spill-over day from an adjacent month, never bookable.
    OutOfRange,
    /// No free slot remains.
    Unbookable,
    /// Free slots remain, but at or below the configured threshold.
    Limited,
    Bookable,
}

/// Resolves the availability tier of one day cell.
///
/// Pure function of its inputs: identical (day, busy set, catalog)
/// always yields the identical tier, which callers rely on for
/// caching. Out-of-range days resolve to `OutOfRange` regardless of
/// busy data.
pub fn resolve_tier(
    day: &CalendarDay,
    busy: &[BusyInterval],
    catalog: &SlotCatalog,
) -> AvailabilityTier {
    if !day.in_reference_month {
        return AvailabilityTier::OutOfRange;
    }
    let free = catalog.offerable_slots(day.date, busy);
    if free.is_empty() {
        AvailabilityTier::Unbookable
    } else if free.len() <= catalog.limited_threshold() {
        AvailabilityTier::Limited
    } else {
        AvailabilityTier::Bookable
    }
}
