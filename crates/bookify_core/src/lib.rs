// --- File: crates/bookify_core/src/lib.rs ---
// Declare modules within this crate
pub mod availability;
pub mod catalog;
pub mod grid;
#[cfg(test)]
mod grid_proptest;
pub mod interval;
pub mod source;

pub use availability::{resolve_tier, AvailabilityTier};
pub use catalog::{SlotCatalog, TimeSlot};
pub use grid::{build_grid, CalendarDay};
pub use interval::{BusyInterval, IntervalError};
pub use source::{BusyFeed, BusyIntervalSource, SourceError};
