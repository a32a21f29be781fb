//! A set of utilities for working with the decimal amounts money is made
//! of.

use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;

/// Create a number.
///
/// This is mostly a wrapper around the underlying decimal type that makes
/// it easier to swap out amount types project-wide without having to change
/// each instance by hand, but can also be used by callers of the core to
/// create amounts more seamlessly.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}

/// Round a value half-up to the nearest multiple of `step`, so converted
/// amounts land on a currency's smallest exchangeable unit (nearest 10
/// won, nearest 0.01 dollar). Midpoints round away from zero.
pub fn round_to_step(value: Decimal, step: Decimal) -> Decimal {
    (value / step).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * step
}
