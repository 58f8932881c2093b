//! Prices

use std::{fmt, ops::Deref, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Errors raised while building a [`Price`].
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The amount is outside the range a catalog price may take.
    #[error("price {0} is outside the range 0.01..=999.99")]
    OutOfRange(Decimal),

    /// The text could not be read as a decimal amount.
    #[error("invalid price: {0}")]
    Parse(String),
}

/// A catalog price, held as an exact decimal between 0.01 and 999.99.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: Decimal,
}

impl Price {
    /// Creates a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::OutOfRange`] when `value` is below [`Price::min`]
    /// or above [`Price::max`].
    pub fn new(value: Decimal) -> Result<Self, PriceError> {
        if value < Self::min() || value > Self::max() {
            return Err(PriceError::OutOfRange(value));
        }

        Ok(Price { value })
    }

    /// Lowest accepted price.
    pub fn min() -> Decimal {
        Decimal::new(1, 2)
    }

    /// Highest accepted price.
    pub fn max() -> Decimal {
        Decimal::new(99_999, 2)
    }

    /// The exact amount.
    pub fn amount(self) -> Decimal {
        self.value
    }
}

impl Deref for Price {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| PriceError::Parse(s.to_string()))?;

        Price::new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_amount(self.value))
    }
}

/// Formats an amount with exactly two decimal places, rounding half away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }

    rounded.rescale(2);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_price_within_bounds() -> TestResult {
        let price = Price::new(Decimal::new(79, 2))?;

        assert_eq!(price.amount(), Decimal::new(79, 2));

        Ok(())
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(Price::new(Price::min()).is_ok());
        assert!(Price::new(Price::max()).is_ok());
    }

    #[test]
    fn out_of_range_prices_are_rejected() {
        assert_eq!(
            Price::new(Decimal::ZERO),
            Err(PriceError::OutOfRange(Decimal::ZERO))
        );
        assert_eq!(
            Price::new(Decimal::new(100_000, 2)),
            Err(PriceError::OutOfRange(Decimal::new(100_000, 2)))
        );
    }

    #[test]
    fn parses_exact_decimal_text() -> TestResult {
        let price: Price = "0.10".parse()?;

        assert_eq!(*price * Decimal::from(3), Decimal::new(30, 2));

        Ok(())
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            "ten".parse::<Price>(),
            Err(PriceError::Parse("ten".to_string()))
        );
    }

    #[test]
    fn format_amount_pads_and_rounds() {
        assert_eq!(format_amount(Decimal::from(15)), "15.00");
        assert_eq!(format_amount(Decimal::new(15, 1)), "1.50");
        assert_eq!(format_amount(Decimal::new(2675, 3)), "2.68");
        assert_eq!(format_amount(Decimal::new(-3, 0)), "-3.00");
    }

    #[test]
    fn format_amount_never_prints_negative_zero() {
        assert_eq!(format_amount(Decimal::new(-1, 3)), "0.00");
    }

    #[test]
    fn display_uses_two_decimals() -> TestResult {
        let price: Price = "5".parse()?;

        assert_eq!(price.to_string(), "5.00");

        Ok(())
    }
}
