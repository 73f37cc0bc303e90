use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `places` decimals, midpoints away from zero.
///
/// Works on the shortest decimal form of the float (what `Display` prints),
/// so `1008.85` rounds to `1008.9` even though its binary value sits just
/// below the midpoint. Non-finite values and magnitudes beyond `Decimal`
/// range are returned unchanged.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let Ok(decimal) = Decimal::from_str(&value.to_string()) else {
        return value;
    };

    decimal
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(value)
}
