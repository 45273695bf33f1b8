use chrono::{NaiveTime, Weekday};

/// Maximal representable time-of-day, 23:59:59.999999.
///
/// The `2400` end marker in a configuration maps to this value rather than to
/// midnight of the next day; nothing in the evaluator handles day rollover.
pub fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).expect("valid time-of-day")
}

/// Normalized lowercase three-letter abbreviation for a weekday.
pub fn day_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_end_of_day_is_just_below_midnight() {
        let eod = end_of_day();
        assert_eq!(eod.hour(), 23);
        assert_eq!(eod.minute(), 59);
        assert_eq!(eod.second(), 59);
        assert_eq!(eod.nanosecond(), 999_999_000);
    }

    #[test]
    fn test_end_of_day_exceeds_any_wall_clock_minute() {
        let last_minute = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
        assert!(last_minute < end_of_day());
    }

    #[test]
    fn test_day_abbrev() {
        assert_eq!(day_abbrev(Weekday::Mon), "mon");
        assert_eq!(day_abbrev(Weekday::Sun), "sun");
    }
}
