// --- File: crates/bookify_gcal/src/handlers.rs ---
use axum::{
    extract::{Query, State},
    response::Json,
};
use bookify_common::error::{external_service_error, validation_error};
use bookify_common::WidgetError;
use bookify_config::AppConfig;
use bookify_core::grid::WEEKDAY_HEADERS;
use bookify_core::{
    build_grid, resolve_tier, AvailabilityTier, BusyFeed, BusyInterval, BusyIntervalSource,
    SlotCatalog, SourceError,
};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

// Define shared state needed by the calendar handlers
#[derive(Clone)]
pub struct CalendarState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<SlotCatalog>,
    /// Absent when the provider is not configured; the view degrades
    /// instead of failing.
    pub source: Option<Arc<dyn BusyIntervalSource>>,
}

#[derive(Deserialize, Debug)]
pub struct MonthViewQuery {
    pub year: i32,
    /// 1-based calendar month
    pub month: u32,
}

#[derive(Deserialize, Debug)]
pub struct DaySlotsQuery {
    /// Date in YYYY-MM-DD format
    pub date: String,
}

/// Where the busy data in a response came from. The UI uses this to
/// tell real availability apart from the degraded default view; it is
/// never silently merged into "zero busy intervals".
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Ok,
    NotConfigured,
    Unavailable,
}

#[derive(Serialize, Debug)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_reference_month: bool,
    pub is_today: bool,
    pub tier: AvailabilityTier,
}

#[derive(Serialize, Debug)]
pub struct MonthViewResponse {
    pub year: i32,
    pub month: u32,
    pub weekdays: [&'static str; 7],
    pub days: Vec<DayCell>,
    pub source: SourceStatus,
}

#[derive(Serialize, Debug)]
pub struct OfferedSlot {
    pub label: String,
    pub start_time: String, // RFC3339 in the catalog time zone
    pub end_time: String,
    pub duration_minutes: i64,
}

#[derive(Serialize, Debug)]
pub struct DaySlotsResponse {
    pub date: NaiveDate,
    pub slots: Vec<OfferedSlot>,
    pub source: SourceStatus,
}

/// Handler for the month calendar view: the full week-aligned grid
/// with one availability tier per cell.
#[axum::debug_handler]
pub async fn month_view_handler(
    State(state): State<Arc<CalendarState>>,
    Query(query): Query<MonthViewQuery>,
) -> Result<Json<MonthViewResponse>, WidgetError> {
    let reference = NaiveDate::from_ymd_opt(query.year, query.month, 1).ok_or_else(|| {
        validation_error(format!(
            "invalid year/month: {}-{}",
            query.year, query.month
        ))
    })?;

    let tz = state.catalog.time_zone();
    let today = Utc::now().with_timezone(&tz).date_naive();
    let grid = build_grid(reference, today);

    // One fetch per visible range, covering the whole extended grid so
    // spill-over days could be resolved as well.
    let first = grid[0].date;
    let last = grid[grid.len() - 1].date;
    let (busy, source) = fetch_feed(&state, first, last).await?;

    let days = grid
        .iter()
        .map(|day| DayCell {
            date: day.date,
            in_reference_month: day.in_reference_month,
            is_today: day.is_today,
            tier: resolve_tier(day, &busy, &state.catalog),
        })
        .collect();

    Ok(Json(MonthViewResponse {
        year: query.year,
        month: query.month,
        weekdays: WEEKDAY_HEADERS,
        days,
        source,
    }))
}

/// Handler for the time-slot picker: the offerable slots of one
/// selected day.
#[axum::debug_handler]
pub async fn day_slots_handler(
    State(state): State<Arc<CalendarState>>,
    Query(query): Query<DaySlotsQuery>,
) -> Result<Json<DaySlotsResponse>, WidgetError> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| validation_error("invalid date format (YYYY-MM-DD)"))?;

    let (busy, source) = fetch_feed(&state, date, date).await?;

    let tz = state.catalog.time_zone();
    let slots = state
        .catalog
        .offerable_slots(date, &busy)
        .into_iter()
        .filter_map(|slot| {
            let (start, end) = state.catalog.slot_bounds(date, &slot)?;
            Some(OfferedSlot {
                label: slot.label().to_string(),
                start_time: start.with_timezone(&tz).to_rfc3339(),
                end_time: end.with_timezone(&tz).to_rfc3339(),
                duration_minutes: state.catalog.slot_duration().num_minutes(),
            })
        })
        .collect();

    Ok(Json(DaySlotsResponse { date, slots, source }))
}

/// Fetches the busy feed for the inclusive day range `[first, last]`.
///
/// Degrade policy (assume-open): an unconfigured or transiently
/// unavailable source yields an empty busy set with the matching
/// status flag, so tiers render as default availability and the shell
/// decides how to present that. Only a malformed provider payload is
/// surfaced as a failure.
async fn fetch_feed(
    state: &CalendarState,
    first: NaiveDate,
    last: NaiveDate,
) -> Result<(Vec<BusyInterval>, SourceStatus), WidgetError> {
    let Some(source) = &state.source else {
        return Ok((Vec::new(), SourceStatus::NotConfigured));
    };

    let tz = state.catalog.time_zone();
    let range_start = local_midnight(first, tz);
    let range_end = local_midnight(last.succ_opt().unwrap_or(last), tz);

    match source.fetch_busy_intervals(range_start, range_end).await {
        Ok(BusyFeed::Ready(busy)) => Ok((busy, SourceStatus::Ok)),
        Ok(BusyFeed::NotConfigured) => Ok((Vec::new(), SourceStatus::NotConfigured)),
        Err(SourceError::Unavailable(msg)) => {
            warn!(
                "busy-interval fetch failed, degrading to default availability: {}",
                msg
            );
            Ok((Vec::new(), SourceStatus::Unavailable))
        }
        Err(e @ SourceError::MalformedPayload(_)) => {
            Err(external_service_error("google_calendar", e))
        }
    }
}

fn local_midnight(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&naive)
        .earliest()
        // Midnight skipped by a DST transition: anchor on UTC midnight.
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
        .with_timezone(&Utc)
}
