//! End-to-end tests: load, parse, and evaluate promo configurations.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use std::io::Write;
use tempfile::NamedTempFile;

use promo_windows::io::ConfigLoader;
use promo_windows::models::end_of_day;
use promo_windows::parsing::parse_config;
use promo_windows::services::{check_promo, is_promo_active};

const CANONICAL: &str = "Mon: 1200-1400 Tue: 0900-1100 Fri: 0000-2400";

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn evaluates_canonical_config_across_the_week() {
    let schedule = parse_config(CANONICAL).unwrap();

    // Week of 2023-03-20 (Monday) through 2023-03-26 (Sunday)
    assert!(is_promo_active(&schedule, at(2023, 3, 20, 12, 32)));
    assert!(!is_promo_active(&schedule, at(2023, 3, 20, 14, 0)));
    assert!(is_promo_active(&schedule, at(2023, 3, 21, 9, 0)));
    assert!(!is_promo_active(&schedule, at(2023, 3, 21, 12, 30)));
    assert!(!is_promo_active(&schedule, at(2023, 3, 22, 12, 0)));
    assert!(is_promo_active(&schedule, at(2023, 3, 24, 0, 0)));
    assert!(is_promo_active(&schedule, at(2023, 3, 24, 23, 59)));
    assert!(!is_promo_active(&schedule, at(2023, 3, 25, 0, 0)));
    assert!(!is_promo_active(&schedule, at(2023, 3, 26, 12, 0)));
}

#[test]
fn repeated_day_config_covers_both_windows() {
    let schedule = parse_config("Fri: 2200-2400 Fri: 2000-2200").unwrap();

    let windows = schedule.windows_for(Weekday::Fri);
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].end, end_of_day());

    // 2023-03-24 is a Friday
    assert!(is_promo_active(&schedule, at(2023, 3, 24, 20, 30)));
    assert!(is_promo_active(&schedule, at(2023, 3, 24, 22, 0)));
    assert!(is_promo_active(&schedule, at(2023, 3, 24, 23, 59)));
    assert!(!is_promo_active(&schedule, at(2023, 3, 24, 19, 59)));
}

#[test]
fn file_backed_config_round_trips_through_loader() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{CANONICAL}").unwrap();

    let config = ConfigLoader::load_from_file(file.path()).unwrap();
    let status = check_promo(&config, at(2023, 3, 20, 12, 32)).unwrap();
    assert!(status.active);
    assert_eq!(status.day, "mon");
}

#[test]
fn schedule_parses_identically_every_time() {
    assert_eq!(
        parse_config(CANONICAL).unwrap(),
        parse_config(CANONICAL).unwrap()
    );
}

#[test]
fn status_json_shape() {
    let status = check_promo(CANONICAL, at(2023, 3, 24, 12, 0)).unwrap();
    let json = serde_json::to_value(&status).unwrap();

    assert_eq!(json["active"], true);
    assert_eq!(json["day"], "fri");
    assert!(json["time"].is_string());
}
