#[cfg(test)]
mod tests {
    use crate::handlers::{
        day_slots_handler, month_view_handler, CalendarState, DaySlotsQuery, MonthViewQuery,
        SourceStatus,
    };
    use crate::source::mock::{MockBusySource, MockOutcome};
    use axum::extract::{Query, State};
    use bookify_common::{HttpStatusCode, WidgetError};
    use bookify_config::{AppConfig, BookingConfig, ServerConfig};
    use bookify_core::{AvailabilityTier, BusyInterval, BusyIntervalSource, SlotCatalog};
    use chrono::{Datelike, TimeZone, Utc};
    use chrono_tz::Tz;
    use std::sync::Arc;

    fn test_config() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            use_gcal: false,
            gcal: None,
            booking: BookingConfig::default(),
        })
    }

    // Catalog in UTC so busy intervals in the tests line up without
    // zone conversion.
    fn state_with(source: Option<Arc<MockBusySource>>) -> Arc<CalendarState> {
        let booking = BookingConfig::default();
        let catalog = SlotCatalog::new(
            &booking.slot_times,
            booking.slot_duration_minutes,
            booking.limited_threshold,
            Tz::UTC,
        )
        .unwrap();
        Arc::new(CalendarState {
            config: test_config(),
            catalog: Arc::new(catalog),
            source: source.map(|s| s as Arc<dyn BusyIntervalSource>),
        })
    }

    fn busy(y: i32, m: u32, d: u32, h1: u32, h2: u32) -> BusyInterval {
        BusyInterval::new(
            Utc.with_ymd_and_hms(y, m, d, h1, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(y, m, d, h2, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_month_view_without_source_degrades_to_default() {
        let state = state_with(None);

        let response = month_view_handler(
            State(state),
            Query(MonthViewQuery {
                year: 2025,
                month: 6,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.source, SourceStatus::NotConfigured);
        assert_eq!(response.days.len(), 35);
        for day in &response.days {
            if day.in_reference_month {
                assert_eq!(day.tier, AvailabilityTier::Bookable);
            } else {
                assert_eq!(day.tier, AvailabilityTier::OutOfRange);
            }
        }
    }

    #[tokio::test]
    async fn test_month_view_resolves_tiers_from_busy_data() {
        // 2025-06-10 fully booked, 2025-06-11 blocked until only the
        // last two slots remain free.
        let source = Arc::new(MockBusySource::with_intervals(vec![
            busy(2025, 6, 10, 0, 23),
            busy(2025, 6, 11, 10, 15),
        ]));
        let state = state_with(Some(source.clone()));

        let response = month_view_handler(
            State(state),
            Query(MonthViewQuery {
                year: 2025,
                month: 6,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.source, SourceStatus::Ok);
        let tier_of = |day: u32| {
            response
                .days
                .iter()
                .find(|c| c.in_reference_month && c.date.day() == day)
                .unwrap()
                .tier
        };
        assert_eq!(tier_of(10), AvailabilityTier::Unbookable);
        assert_eq!(tier_of(11), AvailabilityTier::Limited);
        assert_eq!(tier_of(12), AvailabilityTier::Bookable);

        // The fetch covers the full week-aligned grid, spill-over
        // included: June 2025 renders 2025-06-01 through 2025-07-05.
        let requested = source.requested.lock().unwrap();
        assert_eq!(requested.len(), 1);
        assert_eq!(
            requested[0].0,
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            requested[0].1,
            Utc.with_ymd_and_hms(2025, 7, 6, 0, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_month_view_survives_transient_source_failure() {
        let source = Arc::new(MockBusySource::new(MockOutcome::Unavailable));
        let state = state_with(Some(source));

        let response = month_view_handler(
            State(state),
            Query(MonthViewQuery {
                year: 2025,
                month: 6,
            }),
        )
        .await
        .unwrap();

        // Degraded, flagged, not crashed.
        assert_eq!(response.source, SourceStatus::Unavailable);
        assert!(response
            .days
            .iter()
            .filter(|d| d.in_reference_month)
            .all(|d| d.tier == AvailabilityTier::Bookable));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_surfaced_as_generic_failure() {
        let source = Arc::new(MockBusySource::new(MockOutcome::Malformed));
        let state = state_with(Some(source));

        let error = month_view_handler(
            State(state),
            Query(MonthViewQuery {
                year: 2025,
                month: 6,
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(error, WidgetError::ExternalServiceError { .. }));
        assert_eq!(error.status_code(), 502);
    }

    #[tokio::test]
    async fn test_month_view_rejects_invalid_month() {
        let state = state_with(None);

        let error = month_view_handler(
            State(state),
            Query(MonthViewQuery {
                year: 2025,
                month: 13,
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(error, WidgetError::ValidationError(_)));
        assert_eq!(error.status_code(), 400);
    }

    #[tokio::test]
    async fn test_day_slots_filters_busy_slot() {
        let source = Arc::new(MockBusySource::with_intervals(vec![busy(
            2025, 6, 10, 13, 14,
        )]));
        let state = state_with(Some(source));

        let response = day_slots_handler(
            State(state),
            Query(DaySlotsQuery {
                date: "2025-06-10".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.source, SourceStatus::Ok);
        assert_eq!(response.slots.len(), 5);
        assert!(response.slots.iter().all(|s| s.label != "13:00"));
        assert_eq!(response.slots[0].label, "10:00");
        assert_eq!(response.slots[0].start_time, "2025-06-10T10:00:00+00:00");
        assert_eq!(response.slots[0].end_time, "2025-06-10T11:00:00+00:00");
        assert_eq!(response.slots[0].duration_minutes, 60);
    }

    #[tokio::test]
    async fn test_day_slots_rejects_bad_date() {
        let state = state_with(None);

        let error = day_slots_handler(
            State(state),
            Query(DaySlotsQuery {
                date: "June 10th".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(error, WidgetError::ValidationError(_)));
    }
}
