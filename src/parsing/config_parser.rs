use chrono::{NaiveTime, Weekday};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::models::{end_of_day, PromoWindow, Schedule};

/// End-of-day marker, permitted only as the second half of a range.
const END_OF_DAY_TOKEN: &str = "2400";

/// Parse and validate a day label.
///
/// Only the seven English three-letter abbreviations are accepted,
/// case-insensitively. Full weekday names, empty strings, and anything else
/// fail with [`ConfigError::InvalidDay`].
pub fn parse_day(token: &str) -> Result<Weekday> {
    match token.to_ascii_lowercase().as_str() {
        "mon" => Ok(Weekday::Mon),
        "tue" => Ok(Weekday::Tue),
        "wed" => Ok(Weekday::Wed),
        "thu" => Ok(Weekday::Thu),
        "fri" => Ok(Weekday::Fri),
        "sat" => Ok(Weekday::Sat),
        "sun" => Ok(Weekday::Sun),
        _ => Err(ConfigError::InvalidDay(token.to_string())),
    }
}

/// Parse a 4-digit `HHMM` half into a wall-clock time.
fn parse_clock(half: &str) -> Option<NaiveTime> {
    if half.len() != 4 || !half.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = half[..2].parse().ok()?;
    let minute: u32 = half[2..].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parse and validate an `HHMM-HHMM` range token into a [`PromoWindow`].
///
/// The literal end value `2400` maps to the maximal time-of-day; every other
/// half must be a valid 24-hour clock time, and the start must strictly
/// precede the end. Any violation fails with
/// [`ConfigError::InvalidTimeRange`].
pub fn parse_time_range(token: &str) -> Result<PromoWindow> {
    let err = || ConfigError::InvalidTimeRange(token.to_string());

    let (start_str, end_str) = token.split_once('-').ok_or_else(err)?;
    let start = parse_clock(start_str).ok_or_else(err)?;
    let end = if end_str == END_OF_DAY_TOKEN {
        end_of_day()
    } else {
        parse_clock(end_str).ok_or_else(err)?
    };

    if start >= end {
        return Err(err());
    }
    Ok(PromoWindow::new(start, end))
}

/// Parse a full configuration string into a [`Schedule`].
///
/// Tokens alternate `<Day>:` and `<HHMM-HHMM>`; everything from the first
/// colon of the day label is stripped before validation. A repeated day
/// appends to that day's window sequence rather than overwriting it. An
/// empty or whitespace-only string, an odd token count, or any invalid pair
/// fails the whole parse; no partial schedule is returned.
pub fn parse_config(config: &str) -> Result<Schedule> {
    if config.trim().is_empty() {
        return Err(ConfigError::EmptyConfig);
    }

    let tokens: Vec<&str> = config.split_whitespace().collect();
    let mut schedule = Schedule::new();

    for pair in tokens.chunks(2) {
        let &[day_token, range_token] = pair else {
            return Err(ConfigError::DanglingDay(pair[0].to_string()));
        };

        // The range is checked before the day label.
        let window = parse_time_range(range_token)?;
        let label = day_token.split(':').next().unwrap_or(day_token);
        let day = parse_day(label)?;
        schedule.add_window(day, window);
    }

    debug!(days = schedule.day_count(), "parsed promo configuration");
    Ok(schedule)
}
