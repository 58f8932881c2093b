//! Coupons
//!
//! Order level discounts. A cart carries exactly one [`Coupon`] at a time;
//! [`Coupon::Nil`] stands in when none has been applied.

use rust_decimal::Decimal;

use crate::{
    discounts::{saturating_percent_of, whole_percent},
    inventory::InventoryError,
    prices::format_amount,
};

/// Registration options selecting the kind of coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponSpec {
    /// Percent points off the order subtotal.
    Percent(Decimal),

    /// Fixed amount off the order subtotal.
    Amount(Decimal),
}

impl CouponSpec {
    /// Builds a spec from a raw `kind` name (`percent` or `amount`) and its value.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::UnknownCouponType`] for any other kind.
    pub fn parse(kind: &str, value: Decimal) -> Result<Self, InventoryError> {
        match kind {
            "percent" => Ok(CouponSpec::Percent(value)),
            "amount" => Ok(CouponSpec::Amount(value)),
            other => Err(InventoryError::UnknownCouponType(other.to_string())),
        }
    }
}

/// An order level discount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Coupon {
    /// No coupon; discounts nothing.
    #[default]
    Nil,

    /// Percent points off the subtotal.
    PercentOff {
        /// Coupon code
        name: String,

        /// Percent points off
        percent: Decimal,
    },

    /// Fixed amount off the subtotal, never more than the subtotal itself.
    AmountOff {
        /// Coupon code
        name: String,

        /// Amount off
        amount: Decimal,
    },
}

impl Coupon {
    /// Create a named coupon from its spec.
    pub fn new(name: impl Into<String>, spec: CouponSpec) -> Self {
        let name = name.into();

        match spec {
            CouponSpec::Percent(percent) => Coupon::PercentOff { name, percent },
            CouponSpec::Amount(amount) => Coupon::AmountOff { name, amount },
        }
    }

    /// Coupon code; empty for [`Coupon::Nil`].
    pub fn name(&self) -> &str {
        match self {
            Coupon::Nil => "",
            Coupon::PercentOff { name, .. } | Coupon::AmountOff { name, .. } => name.as_str(),
        }
    }

    /// Discount granted on an order whose post-promotion subtotal is `subtotal`.
    ///
    /// Coupon values are unbounded, so a percent discount saturates at the
    /// limits of [`Decimal`].
    pub fn discount(&self, subtotal: Decimal) -> Decimal {
        match self {
            Coupon::Nil => Decimal::ZERO,
            Coupon::PercentOff { percent, .. } => saturating_percent_of(*percent, subtotal),
            Coupon::AmountOff { amount, .. } => subtotal.min(*amount),
        }
    }

    /// Short description printed next to the coupon code on an invoice.
    pub fn description(&self) -> String {
        match self {
            Coupon::Nil => String::new(),
            Coupon::PercentOff { percent, .. } => format!("{}% off", whole_percent(*percent)),
            Coupon::AmountOff { amount, .. } => format!("{:<5} off", format_amount(*amount)),
        }
    }

    /// Whether this is [`Coupon::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, Coupon::Nil)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn percent_off_takes_share_of_subtotal() {
        let coupon = Coupon::new("TEATIME", CouponSpec::Percent(Decimal::from(20)));

        assert_eq!(coupon.discount(Decimal::from(50)), Decimal::from(10));
        assert_eq!(coupon.description(), "20% off");
        assert_eq!(coupon.name(), "TEATIME");
    }

    #[test]
    fn amount_off_is_capped_by_subtotal() {
        let coupon = Coupon::new("FIVE", CouponSpec::Amount(Decimal::from(5)));

        assert_eq!(coupon.discount(Decimal::from(3)), Decimal::from(3));
        assert_eq!(coupon.discount(Decimal::from(30)), Decimal::from(5));
    }

    #[test]
    fn amount_off_description_is_left_aligned_two_decimals() {
        let five = Coupon::new("FIVE", CouponSpec::Amount(Decimal::from(5)));
        let ten = Coupon::new("TEN", CouponSpec::Amount(Decimal::new(1000, 2)));

        assert_eq!(five.description(), "5.00  off");
        assert_eq!(ten.description(), "10.00 off");
    }

    #[test]
    fn extreme_percent_saturates() {
        let coupon = Coupon::new("ALL", CouponSpec::Percent(Decimal::MAX));

        assert_eq!(coupon.discount(Decimal::from(1000)), Decimal::MAX);
        assert_eq!(coupon.discount(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn nil_coupon_is_inert() {
        let coupon = Coupon::default();

        assert!(coupon.is_nil());
        assert_eq!(coupon.discount(Decimal::from(100)), Decimal::ZERO);
        assert_eq!(coupon.name(), "");
        assert_eq!(coupon.description(), "");
    }

    #[test]
    fn parse_recognizes_known_kinds() -> TestResult {
        assert_eq!(
            CouponSpec::parse("percent", Decimal::from(10))?,
            CouponSpec::Percent(Decimal::from(10))
        );
        assert_eq!(
            CouponSpec::parse("amount", Decimal::from(10))?,
            CouponSpec::Amount(Decimal::from(10))
        );

        Ok(())
    }

    #[test]
    fn parse_rejects_unknown_kinds() {
        assert_eq!(
            CouponSpec::parse("bogo", Decimal::ONE),
            Err(InventoryError::UnknownCouponType("bogo".to_string()))
        );
    }
}
