// --- File: crates/bookify_core/src/grid.rs ---
//! Month-grid construction for the booking calendar.
//!
//! The grid always spans whole weeks: it runs from the Sunday on or
//! before the 1st of the reference month to the Saturday on or after
//! the month's last day, so the widget can render a rectangular block
//! of cells with spill-over days from the adjacent months.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

/// Day-of-week header labels for the grid, Sunday first. The grid's
/// week boundary convention and these labels must stay in sync.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One cell of the month grid. Built fresh on every grid request and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    /// Calendar date of the cell, no time component.
    pub date: NaiveDate,
    /// True iff the cell's year and month equal the reference month's.
    pub in_reference_month: bool,
    /// True iff the cell equals the caller-supplied "today".
    pub is_today: bool,
}

/// Builds the ordered day-cell sequence for the month containing
/// `reference`. Only the year and month of `reference` are significant.
///
/// `today` is threaded in explicitly so the function stays pure; it is
/// never read from an ambient clock. The result length is a positive
/// multiple of 7, except for months touching the supported calendar
/// bounds, where the grid clips instead of extending past them. The
/// function is total: no input date panics.
pub fn build_grid(reference: NaiveDate, today: NaiveDate) -> Vec<CalendarDay> {
    let first_of_month = reference.with_day(1).unwrap_or(reference);
    let last_of_month = first_of_month
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX);

    // Week runs Sunday through Saturday, clipped at the calendar bounds.
    let grid_start = first_of_month
        .checked_sub_signed(Duration::days(i64::from(
            first_of_month.weekday().num_days_from_sunday(),
        )))
        .unwrap_or(NaiveDate::MIN);
    let grid_end = last_of_month
        .checked_add_signed(Duration::days(i64::from(
            6 - last_of_month.weekday().num_days_from_sunday(),
        )))
        .unwrap_or(NaiveDate::MAX);

    let mut days = Vec::with_capacity(42);
    let mut current = grid_start;
    while current <= grid_end {
        days.push(CalendarDay {
            date: current,
            in_reference_month: current.year() == reference.year()
                && current.month() == reference.month(),
            is_today: current == today,
        });
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    days
}
