//! Promo membership queries.
//!
//! Every query parses the configuration from scratch and evaluates a single
//! point in time against it. The schedule never outlives the query.

use chrono::{Datelike, Local, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::{day_abbrev, Schedule};
use crate::parsing::config_parser;

/// Outcome of a promo query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromoStatus {
    pub active: bool,
    /// Normalized lowercase three-letter day abbreviation, e.g. "mon"
    pub day: String,
    pub time: NaiveTime,
}

/// Whether the promo is active at `now` under `schedule`.
///
/// A day absent from the schedule is never active. Within a day, windows are
/// scanned in configuration order; the first match wins.
pub fn is_promo_active(schedule: &Schedule, now: NaiveDateTime) -> bool {
    schedule.is_active_at(now.weekday(), now.time())
}

/// Parse `config` and evaluate it at `now`.
///
/// An invalid configuration aborts the whole query; there is no fallback
/// schedule.
pub fn check_promo(config: &str, now: NaiveDateTime) -> Result<PromoStatus> {
    let schedule = config_parser::parse_config(config)?;
    let active = is_promo_active(&schedule, now);
    let day = day_abbrev(now.weekday());
    debug!(day, active, "evaluated promo window");

    Ok(PromoStatus {
        active,
        day: day.to_string(),
        time: now.time(),
    })
}

/// Evaluate `config` against the local wall clock, read once.
pub fn check_promo_now(config: &str) -> Result<PromoStatus> {
    check_promo(config, Local::now().naive_local())
}
