//! # Fractional Digits
//!
//! How many decimal places a provider keeps. `-1` is a value, not an error
//! code: it means the provider applies no rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Largest scale at which rounding an `f64` still changes anything.
const MAX_F64_SCALE: u32 = 15;

/// Number of decimal places a provider keeps, or "no rounding".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FractionalDigits(i32);

impl FractionalDigits {
    /// The provider does not round amounts.
    pub const NO_ROUNDING: Self = Self(-1);

    /// Wraps a digit count. Any negative count means [`Self::NO_ROUNDING`].
    #[must_use]
    pub const fn new(digits: i32) -> Self {
        if digits < 0 {
            Self::NO_ROUNDING
        } else {
            Self(digits)
        }
    }

    /// Raw value as reported by the provider (`-1` for no rounding).
    #[inline]
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether the provider rounds at all.
    #[inline]
    #[must_use]
    pub const fn is_rounded(self) -> bool {
        self.0 >= 0
    }

    /// Number of decimal places, or `None` for no rounding.
    #[must_use]
    pub fn scale(self) -> Option<u32> {
        u32::try_from(self.0).ok()
    }

    /// Rounds half away from zero to the provider's scale. Amounts too large
    /// to scale are returned as they are.
    #[must_use]
    pub fn round_amount(self, amount: f64) -> f64 {
        match self.scale() {
            Some(scale) if scale <= MAX_F64_SCALE => {
                // scale <= 15, the cast cannot truncate
                #[allow(clippy::cast_possible_wrap)]
                let factor = 10f64.powi(scale as i32);
                let scaled = amount * factor;
                if scaled.is_finite() {
                    scaled.round() / factor
                } else {
                    amount
                }
            }
            _ => amount,
        }
    }

    /// Rounds half away from zero to the provider's scale.
    #[must_use]
    pub fn round_decimal(self, amount: Decimal) -> Decimal {
        match self.scale() {
            Some(scale) => {
                amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
            }
            None => amount,
        }
    }
}

impl Default for FractionalDigits {
    fn default() -> Self {
        Self::NO_ROUNDING
    }
}

impl From<i32> for FractionalDigits {
    fn from(digits: i32) -> Self {
        Self::new(digits)
    }
}
