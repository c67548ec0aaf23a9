use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::Config;
use crate::error::AppError;

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Inclusive day count of a stay. A missing end date means a single day, and
/// the count never drops below 1.
pub fn day_count(start: NaiveDate, end: Option<NaiveDate>) -> i64 {
    match end {
        Some(end) => ((end - start).num_days() + 1).max(1),
        None => 1,
    }
}

pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Bookings are accepted from `min_advance_days` (counted so that 1 means
/// "from today") up to `max_advance_days` ahead.
pub fn within_booking_window(config: &Config, date: NaiveDate, today: NaiveDate) -> bool {
    let earliest = today + chrono::Duration::days(config.min_advance_days - 1);
    let latest = today + chrono::Duration::days(config.max_advance_days);
    date >= earliest && date <= latest
}

pub fn validate_range(
    config: &Config,
    start: NaiveDate,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), AppError> {
    if is_past(start, today) {
        return Err(AppError::Validation(
            "Reservations cannot be made for past dates".into(),
        ));
    }
    if !within_booking_window(config, start, today) {
        return Err(AppError::Validation(format!(
            "Reservations must be made between {} and {} days in advance",
            config.min_advance_days, config.max_advance_days
        )));
    }
    if let Some(end) = end {
        if end < start {
            return Err(AppError::Validation(
                "End date cannot come before the start date".into(),
            ));
        }
        if !within_booking_window(config, end, today) {
            return Err(AppError::Validation(format!(
                "Reservations must be made between {} and {} days in advance",
                config.min_advance_days, config.max_advance_days
            )));
        }
        if day_count(start, Some(end)) > config.max_range_days {
            return Err(AppError::Validation(format!(
                "Reservations cannot exceed {} days",
                config.max_range_days
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config as config;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn weekend_is_saturday_or_sunday() {
        // 2025-06-14 is a Saturday
        assert!(is_weekend(d(2025, 6, 14)));
        assert!(is_weekend(d(2025, 6, 15)));
        assert!(!is_weekend(d(2025, 6, 13)));
        assert!(!is_weekend(d(2025, 6, 16)));
    }

    #[test]
    fn day_count_is_inclusive_with_floor_of_one() {
        let start = d(2025, 6, 10);
        assert_eq!(day_count(start, None), 1);
        assert_eq!(day_count(start, Some(start)), 1);
        assert_eq!(day_count(start, Some(d(2025, 6, 11))), 2);
        assert_eq!(day_count(start, Some(d(2025, 6, 12))), 3);
        // Inverted ranges are rejected elsewhere; the count still floors at 1.
        assert_eq!(day_count(start, Some(d(2025, 6, 1))), 1);
    }

    #[test]
    fn booking_window_bounds() {
        let cfg = config();
        let today = d(2025, 6, 10);
        assert!(within_booking_window(&cfg, today, today));
        assert!(within_booking_window(&cfg, today + chrono::Duration::days(90), today));
        assert!(!within_booking_window(&cfg, today + chrono::Duration::days(91), today));
        assert!(!within_booking_window(&cfg, d(2025, 6, 9), today));
    }

    #[test]
    fn range_validation() {
        let cfg = config();
        let today = d(2025, 6, 10);

        assert!(validate_range(&cfg, d(2025, 6, 20), None, today).is_ok());
        assert!(validate_range(&cfg, d(2025, 6, 20), Some(d(2025, 6, 25)), today).is_ok());

        // past start
        assert!(validate_range(&cfg, d(2025, 6, 1), None, today).is_err());
        // inverted range
        assert!(validate_range(&cfg, d(2025, 6, 20), Some(d(2025, 6, 19)), today).is_err());
        // over the 30-day cap
        assert!(validate_range(&cfg, d(2025, 6, 11), Some(d(2025, 7, 20)), today).is_err());
    }
}
