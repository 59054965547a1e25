// --- File: crates/bookify_gcal/src/routes.rs ---

use crate::auth::create_calendar_hub;
use crate::handlers::{day_slots_handler, month_view_handler, CalendarState};
use crate::source::GoogleBusySource;
use axum::{routing::get, Router};
use bookify_config::AppConfig;
use bookify_core::{BusyIntervalSource, SlotCatalog};
use chrono_tz::Tz;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// Creates a router containing all routes for the booking calendar.
///
/// When the Google Calendar feed is disabled or not configured the
/// routes still mount; responses carry the not-configured status and
/// default availability instead (mirrors the original widget API).
pub async fn routes(config: Arc<AppConfig>) -> Router {
    let booking = &config.booking;
    // A typo'd zone must not silently shift every served instant.
    let tz = Tz::from_str(&booking.time_zone)
        .unwrap_or_else(|e| panic!("invalid booking time zone {:?}: {}", booking.time_zone, e));
    let catalog = SlotCatalog::new(
        &booking.slot_times,
        booking.slot_duration_minutes,
        booking.limited_threshold,
        tz,
    )
    .expect("invalid booking slot configuration");

    let source: Option<Arc<dyn BusyIntervalSource>> = match config.gcal.as_ref() {
        Some(gcal) if config.use_gcal && gcal.is_configured() => {
            match create_calendar_hub(gcal).await {
                Ok(hub) => {
                    let calendar_id = gcal
                        .calendar_id
                        .clone()
                        .expect("calendar_id checked by is_configured");
                    Some(Arc::new(GoogleBusySource::new(
                        Arc::new(hub),
                        calendar_id,
                        gcal.max_results,
                    )) as Arc<dyn BusyIntervalSource>)
                }
                Err(e) => {
                    warn!("failed to build calendar hub, running unconfigured: {}", e);
                    None
                }
            }
        }
        _ => {
            info!("Google Calendar credentials missing, showing default availability");
            None
        }
    };

    let state = Arc::new(CalendarState {
        config,
        catalog: Arc::new(catalog),
        source,
    });

    Router::new()
        .route("/calendar/month", get(month_view_handler))
        .route("/calendar/slots", get(day_slots_handler))
        .with_state(state)
}
