//! Discounts
//!
//! Percentage arithmetic shared by promotions and coupons. Percentages are
//! given in percent points (`50` means half).

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};

/// Calculates `percent` percent of `amount`, exactly.
pub fn percent_of(percent: Decimal, amount: Decimal) -> Decimal {
    Percentage::from(percent / Decimal::ONE_HUNDRED) * amount
}

/// Calculates `percent` percent of `amount` for percentages with no upper
/// bound, saturating at the limits of [`Decimal`] instead of overflowing.
pub fn saturating_percent_of(percent: Decimal, amount: Decimal) -> Decimal {
    (percent / Decimal::ONE_HUNDRED).saturating_mul(amount)
}

/// Percent points with any fraction dropped, as shown in labels (`12.5` -> `12`).
pub fn whole_percent(percent: Decimal) -> Decimal {
    percent.trunc()
}

/// Percent points rounded to a whole number (`12.5` -> `12`, `13.5` -> `14`).
pub fn rounded_percent(percent: Decimal) -> Decimal {
    percent.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_is_exact() {
        assert_eq!(
            percent_of(Decimal::from(50), Decimal::from(10)),
            Decimal::from(5)
        );
        assert_eq!(
            percent_of(Decimal::from(15), Decimal::new(10, 2)),
            Decimal::new(15, 3)
        );
    }

    #[test]
    fn percent_of_zero_is_zero() {
        assert!(percent_of(Decimal::ZERO, Decimal::from(10)).is_zero());
        assert!(percent_of(Decimal::from(30), Decimal::ZERO).is_zero());
    }

    #[test]
    fn saturating_percent_of_matches_percent_of_in_range() {
        assert_eq!(
            saturating_percent_of(Decimal::from(20), Decimal::new(19_693, 3)),
            percent_of(Decimal::from(20), Decimal::new(19_693, 3))
        );
    }

    #[test]
    fn saturating_percent_of_clamps_at_decimal_limits() {
        let amount = Decimal::new(9_899_901, 2);

        assert_eq!(saturating_percent_of(Decimal::MAX, amount), Decimal::MAX);
        assert_eq!(saturating_percent_of(Decimal::MIN, amount), Decimal::MIN);
    }

    #[test]
    fn whole_percent_truncates() {
        assert_eq!(whole_percent(Decimal::new(125, 1)).to_string(), "12");
        assert_eq!(whole_percent(Decimal::from(50)).to_string(), "50");
    }

    #[test]
    fn rounded_percent_rounds_half_to_even() {
        assert_eq!(rounded_percent(Decimal::new(125, 1)).to_string(), "12");
        assert_eq!(rounded_percent(Decimal::new(135, 1)).to_string(), "14");
    }
}
