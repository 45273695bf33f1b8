//! # Promo Windows
//!
//! Time-gated promotion evaluator for vending machines.
//!
//! This crate parses a compact per-day window configuration such as
//! `"Mon: 1200-1400 Tue: 0900-1100 Fri: 0000-2400"` and answers whether the
//! promotion is active at a given weekday and time-of-day. The schedule is
//! rebuilt fresh from the configuration string on every query and any
//! malformed input aborts the whole evaluation; no partial schedule is ever
//! produced.
//!
//! ## Architecture
//!
//! The crate is organized into a few small modules:
//!
//! - [`models`]: domain types ([`models::PromoWindow`], [`models::Schedule`])
//! - [`parsing`]: configuration tokenizer and validators
//! - [`services`]: evaluation service and one-shot query entry points
//! - [`io`]: configuration acquisition from files or readers
//! - [`error`]: the single fatal-input-error type

pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod services;

pub use error::{ConfigError, Result};
