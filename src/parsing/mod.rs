//! Parser for the compact promo window configuration format.
//!
//! A configuration is a whitespace-separated sequence of token pairs, each
//! pair a day label followed by a time range:
//!
//! ```text
//! Mon: 1200-1400 Tue: 0900-1100 Fri: 0000-2400
//! ```
//!
//! Day labels are the English three-letter abbreviations (case-insensitive);
//! time ranges are `HHMM-HHMM` on the 24-hour clock, with `2400` permitted as
//! an end marker meaning "until end of day".

pub mod config_parser;


pub use config_parser::{parse_config, parse_day, parse_time_range};
