// --- File: crates/bookify_gcal/src/source.rs ---
//! Google Calendar implementation of the busy-interval source.
//!
//! Fetches events for a date range and reduces them to validated
//! `BusyInterval`s. The provider expands recurring events into single
//! instances (`single_events`), so no recurrence handling happens here.

use std::sync::Arc;

use bookify_common::BoxFuture;
use bookify_core::{BusyFeed, BusyInterval, BusyIntervalSource, SourceError};
use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use google_calendar3::api::EventDateTime;
use tracing::debug;

use crate::auth::HubType;

/// Busy-interval source backed by the Google Calendar events API.
pub struct GoogleBusySource {
    hub: Arc<HubType>,
    calendar_id: String,
    max_results: u32,
}

impl GoogleBusySource {
    pub fn new(hub: Arc<HubType>, calendar_id: impl Into<String>, max_results: u32) -> Self {
        Self {
            hub,
            calendar_id: calendar_id.into(),
            max_results,
        }
    }
}

impl BusyIntervalSource for GoogleBusySource {
    fn fetch_busy_intervals(
        &self,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> BoxFuture<'_, BusyFeed, SourceError> {
        let calendar_id = self.calendar_id.clone();
        let hub = self.hub.clone();
        let max_results = self.max_results;

        Box::pin(async move {
            let (_response, events_list) = hub
                .events()
                .list(&calendar_id)
                .time_min(range_start)
                .time_max(range_end)
                .max_results(max_results as i32)
                .single_events(true) // Expand recurring events
                .order_by("startTime")
                .doit()
                .await
                .map_err(|e| SourceError::Unavailable(e.to_string()))?;

            let mut intervals = Vec::new();
            for event in events_list.items.unwrap_or_default() {
                if event.status.as_deref() == Some("cancelled") {
                    continue;
                }
                let (start, end) = match (
                    event_instant(event.start.as_ref()),
                    event_instant(event.end.as_ref()),
                ) {
                    (Some(start), Some(end)) => (start, end),
                    _ => {
                        debug!("skipping event with missing start/end: {:?}", event.id);
                        continue;
                    }
                };
                // Malformed intervals are rejected here, at the
                // ingestion boundary; they never reach tier computation.
                let interval = BusyInterval::new(start, end)
                    .map_err(|e| SourceError::MalformedPayload(e.to_string()))?;
                if interval.is_empty() {
                    continue;
                }
                intervals.push(interval);
            }
            Ok(BusyFeed::Ready(intervals))
        })
    }
}

/// Reduces a provider timestamp to an instant. All-day events carry a
/// date only; Google's end date is already exclusive, so anchoring both
/// ends at midnight keeps the interval half-open over whole days.
pub(crate) fn event_instant(edt: Option<&EventDateTime>) -> Option<DateTime<Utc>> {
    let edt = edt?;
    if let Some(dt) = edt.date_time {
        return Some(dt.with_timezone(&Utc));
    }
    let date = edt.date?;
    Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}
