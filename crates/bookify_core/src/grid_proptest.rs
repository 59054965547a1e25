#[cfg(test)]
mod tests {
    use crate::grid::build_grid;
    use chrono::{Datelike, NaiveDate, Weekday};
    use proptest::prelude::*;

    proptest! {
        // The grid is always a positive whole number of Sunday-aligned weeks.
        #[test]
        fn test_grid_is_whole_weeks(
            year in 1970..2100i32,
            month in 1..=12u32,
            day in 1..=28u32,
        ) {
            let reference = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

            let grid = build_grid(reference, today);

            prop_assert!(!grid.is_empty());
            prop_assert_eq!(grid.len() % 7, 0);
            prop_assert_eq!(grid[0].date.weekday(), Weekday::Sun);
            prop_assert_eq!(grid.last().unwrap().date.weekday(), Weekday::Sat);
        }

        // Every date of the reference month appears, flagged in-month,
        // and nothing else is flagged.
        #[test]
        fn test_in_month_flag_matches_reference(
            year in 1970..2100i32,
            month in 1..=12u32,
        ) {
            let reference = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

            let grid = build_grid(reference, today);

            let mut expected = reference;
            for day in &grid {
                prop_assert_eq!(
                    day.in_reference_month,
                    day.date.year() == year && day.date.month() == month
                );
                if day.in_reference_month {
                    prop_assert_eq!(day.date, expected);
                    expected = expected.succ_opt().unwrap();
                }
            }
            // All month days consumed: the walk ended on the 1st of the
            // following month.
            prop_assert_eq!(expected.day(), 1);
            prop_assert!(expected > reference);
        }

        // Consecutive cells are consecutive dates.
        #[test]
        fn test_grid_dates_are_contiguous(
            year in 1970..2100i32,
            month in 1..=12u32,
        ) {
            let reference = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

            let grid = build_grid(reference, today);

            for pair in grid.windows(2) {
                prop_assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
            }
        }
    }
}
