//! Price display helpers
//!
//! Prices are stored as `f64`; display goes through `Decimal` so that
//! rounding to cents is exact (half away from zero).

use rust_decimal::prelude::*;

/// Decimal places shown for prices
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round a price to cents
pub fn round_price(value: f64) -> Decimal {
    to_decimal(value).round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a price with a currency prefix, e.g. `R89.99`
pub fn format_price(value: f64, currency: &str) -> String {
    let rounded = round_price(value);
    format!("{currency}{rounded:.prec$}", prec = DECIMAL_PLACES as usize)
}
