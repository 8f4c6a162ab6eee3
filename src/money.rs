// 💵 Money - exact decimal plan rates
// Rates are compared and formatted as decimals, never as binary floats.

use crate::error::SlcspError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Fractional digits shown on output
pub const DISPLAY_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// "No plan seen" marker used by the aggregator
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Round half-to-even to two places and pin the scale so `400` prints as `400.00`
    pub fn to_display_scale(&self) -> Money {
        let mut rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(DISPLAY_SCALE);
        Money(rounded)
    }
}

impl FromStr for Money {
    type Err = SlcspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .map(Money)
            .map_err(|e| SlcspError::InvalidRate {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_scale().0)
    }
}

// ============================================================================
// TESTS
// ============================================================================
