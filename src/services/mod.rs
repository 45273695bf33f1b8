//! Service layer for promo evaluation.
//!
//! Services sit between the configuration parser and the callers (the
//! console binary, tests): they parse a fresh schedule per query, consult the
//! clock, and return the decision.

pub mod promo;

pub use promo::{check_promo, check_promo_now, is_promo_active, PromoStatus};
