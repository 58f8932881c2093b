//! Promotions
//!
//! Per-product, quantity based discount rules. A product carries exactly one
//! [`Promotion`], chosen at registration time through a [`PromotionSpec`].

use std::fmt;

use rust_decimal::Decimal;

use crate::{
    discounts::{percent_of, rounded_percent, whole_percent},
    inventory::InventoryError,
};

/// Registration options selecting the promotion a product carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromotionSpec {
    /// No promotion.
    #[default]
    None,

    /// Every nth unit is free.
    GetOneFree(u32),

    /// Percentage off every complete package of `size` units.
    Package {
        /// Units per package
        size: u32,

        /// Percent points off each unit in a complete package
        percent: Decimal,
    },

    /// Percentage off every unit beyond `threshold`.
    Threshold {
        /// Units bought at full price before the discount starts
        threshold: u32,

        /// Percent points off each unit past the threshold
        percent: Decimal,
    },
}

/// A validated per-product promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Promotion {
    /// Never discounts.
    #[default]
    None,

    /// Every `nth` unit is entirely free.
    GetOneFree {
        /// Position of the free unit in each run
        nth: u32,
    },

    /// `percent` off the price of every unit in a complete package.
    Package {
        /// Units per package
        size: u32,

        /// Percent points off
        percent: Decimal,
    },

    /// `percent` off every unit past the first `threshold`.
    Threshold {
        /// Units bought at full price
        threshold: u32,

        /// Percent points off
        percent: Decimal,
    },
}

impl Promotion {
    /// Discount granted on `count` units priced at `unit_price` each.
    ///
    /// The result is never negative and never exceeds `count * unit_price`.
    pub fn discount(&self, count: u32, unit_price: Decimal) -> Decimal {
        match *self {
            Promotion::None => Decimal::ZERO,
            Promotion::GetOneFree { nth } => {
                let free_units = count.checked_div(nth).unwrap_or(0);

                Decimal::from(free_units) * unit_price
            }
            Promotion::Package { size, percent } => {
                let packages = count.checked_div(size).unwrap_or(0);

                percent_of(percent, unit_price) * Decimal::from(size) * Decimal::from(packages)
            }
            Promotion::Threshold { threshold, percent } => {
                let excess = count.saturating_sub(threshold);

                Decimal::from(excess) * percent_of(percent, unit_price)
            }
        }
    }

    /// Human readable description shown beneath discounted invoice lines.
    pub fn label(&self) -> String {
        match *self {
            Promotion::None => String::new(),
            Promotion::GetOneFree { nth } => {
                format!("buy {}, get 1 free", nth.saturating_sub(1))
            }
            Promotion::Package { size, percent } => {
                format!("get {}% off for every {size}", whole_percent(percent))
            }
            Promotion::Threshold { threshold, percent } => {
                let percent = rounded_percent(percent).to_string();

                format!(
                    "{percent:>2}% off of every after the {threshold}{}",
                    ordinal_suffix(threshold)
                )
            }
        }
    }

    /// Whether this is [`Promotion::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Promotion::None)
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl TryFrom<PromotionSpec> for Promotion {
    type Error = InventoryError;

    fn try_from(spec: PromotionSpec) -> Result<Self, Self::Error> {
        match spec {
            PromotionSpec::None => Ok(Promotion::None),
            PromotionSpec::GetOneFree(0) => Err(InventoryError::InvalidPromotion(
                "get_one_free needs a run of at least one unit".to_string(),
            )),
            PromotionSpec::GetOneFree(nth) => Ok(Promotion::GetOneFree { nth }),
            PromotionSpec::Package { size: 0, .. } => Err(InventoryError::InvalidPromotion(
                "package size must be at least one unit".to_string(),
            )),
            PromotionSpec::Package { size, percent } => {
                check_percent(percent)?;

                Ok(Promotion::Package { size, percent })
            }
            PromotionSpec::Threshold { threshold, percent } => {
                check_percent(percent)?;

                Ok(Promotion::Threshold { threshold, percent })
            }
        }
    }
}

fn check_percent(percent: Decimal) -> Result<(), InventoryError> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(InventoryError::InvalidPromotion(format!(
            "percent {percent} is outside 0..=100"
        )));
    }

    Ok(())
}

fn ordinal_suffix(n: u32) -> &'static str {
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
