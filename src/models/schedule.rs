//! Domain models for promo windows and the per-day schedule.

use std::collections::HashMap;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::time::end_of_day;

/// A single allowed promo interval within one day.
///
/// The start strictly precedes the end; the parser rejects anything else.
/// A window whose end equals the maximal time-of-day came from the `2400`
/// end-of-day marker and is treated as closed on both ends, every other
/// window is half-open `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PromoWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl PromoWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Whether `time` falls inside this window.
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.end == end_of_day() {
            self.start <= time && time <= self.end
        } else {
            self.start <= time && time < self.end
        }
    }
}

/// Per-weekday promo windows parsed from a configuration string.
///
/// A day may carry zero, one, or several windows. Repeated day labels in the
/// configuration append in order, and overlapping windows are kept as-is,
/// neither merged nor rejected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schedule {
    windows: HashMap<Weekday, Vec<PromoWindow>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a window to `day`, preserving insertion order.
    pub fn add_window(&mut self, day: Weekday, window: PromoWindow) {
        self.windows.entry(day).or_default().push(window);
    }

    /// Windows declared for `day`, in configuration order.
    pub fn windows_for(&self, day: Weekday) -> &[PromoWindow] {
        self.windows.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of days with at least one window.
    pub fn day_count(&self) -> usize {
        self.windows.len()
    }

    /// True when `time` falls inside any window declared for `day`.
    pub fn is_active_at(&self, day: Weekday, time: NaiveTime) -> bool {
        self.windows_for(day).iter().any(|w| w.contains(time))
    }
}
