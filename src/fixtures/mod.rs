//! Fixtures
//!
//! YAML descriptions of an inventory and, optionally, a cart to check out.
//!
//! ```yaml
//! products:
//!   - name: Green Tea
//!     price: "0.79"
//!     promotion: { get_one_free: 3 }
//! coupons:
//!   TEATIME: { percent: 20 }
//! cart:
//!   items:
//!     - { product: Green Tea, count: 3 }
//!   coupon: TEATIME
//! ```

use std::{collections::BTreeMap, fs, path::Path, str::FromStr};

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_norway::Mapping;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{CartError, ShoppingCart},
    coupons::CouponSpec,
    inventory::{Inventory, InventoryError},
    prices::{Price, PriceError},
    promotions::PromotionSpec,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid or out of range price
    #[error(transparent)]
    Price(#[from] PriceError),

    /// A product or coupon could not be registered
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// A cart line could not be added
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Checkout fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    /// Products, registered in order
    pub products: Vec<ProductFixture>,

    /// Coupon code -> single `kind: value` entry, registered in file order
    #[serde(default)]
    pub coupons: Mapping,

    /// Cart to check out
    #[serde(default)]
    pub cart: Option<CartFixture>,
}

/// Product fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Product price (e.g. "0.79"), parsed exactly
    pub price: String,

    /// Promotion, if any
    #[serde(default)]
    pub promotion: Option<PromotionFixture>,
}

/// Promotion fixture from YAML
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionFixture {
    /// `get_one_free: n`
    GetOneFree(u32),

    /// `package: [size, percent]`
    Package(u32, Decimal),

    /// `threshold: [threshold, percent]`
    Threshold(u32, Decimal),
}

impl From<PromotionFixture> for PromotionSpec {
    fn from(fixture: PromotionFixture) -> Self {
        match fixture {
            PromotionFixture::GetOneFree(nth) => PromotionSpec::GetOneFree(nth),
            PromotionFixture::Package(size, percent) => PromotionSpec::Package { size, percent },
            PromotionFixture::Threshold(threshold, percent) => {
                PromotionSpec::Threshold { threshold, percent }
            }
        }
    }
}

/// Cart fixture
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartFixture {
    /// Lines to add, in order
    #[serde(default)]
    pub items: Vec<CartItemFixture>,

    /// Coupon code to apply
    #[serde(default)]
    pub coupon: Option<String>,
}

/// Cart line fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartItemFixture {
    /// Product name
    pub product: String,

    /// Units to add
    #[serde(default = "one")]
    pub count: u32,
}

fn one() -> u32 {
    1
}

impl Fixture {
    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path.as_ref())?;

        debug!(path = %path.as_ref().display(), "loaded fixture");

        contents.parse()
    }

    /// Build an inventory holding the fixture's products and coupons.
    ///
    /// # Errors
    ///
    /// Returns an error if a price cannot be parsed or a registration is rejected.
    pub fn inventory(&self) -> Result<Inventory, FixtureError> {
        let mut inventory = Inventory::new();

        for product in &self.products {
            let price: Price = product.price.parse()?;
            let promotion = product
                .promotion
                .map_or_else(PromotionSpec::default, PromotionSpec::from);

            inventory.register(&product.name, price.amount(), promotion)?;
        }

        for (name, kind) in &self.coupons {
            let name: String = serde_norway::from_value(name.clone())?;
            let kind: BTreeMap<String, Decimal> = serde_norway::from_value(kind.clone())?;

            inventory.register_coupon(&name, coupon_spec(&kind)?)?;
        }

        Ok(inventory)
    }

    /// Add the fixture's cart lines and coupon to `cart`.
    ///
    /// # Errors
    ///
    /// Returns an error if a line names an unknown product or an invalid quantity.
    pub fn fill_cart(&self, cart: &mut ShoppingCart<'_>) -> Result<(), FixtureError> {
        let Some(fixture) = &self.cart else {
            return Ok(());
        };

        for item in &fixture.items {
            cart.add(&item.product, item.count)?;
        }

        if let Some(coupon) = &fixture.coupon {
            cart.apply_coupon(coupon);
        }

        Ok(())
    }
}

impl FromStr for Fixture {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_norway::from_str(s)?)
    }
}

/// Turn a `{ kind: value }` coupon entry into a spec.
fn coupon_spec(kind: &BTreeMap<String, Decimal>) -> Result<CouponSpec, InventoryError> {
    let mut entries = kind.iter();

    match (entries.next(), entries.next()) {
        (Some((kind, value)), None) => CouponSpec::parse(kind, *value),
        _ => Err(InventoryError::UnknownCouponType(
            kind.keys().map(String::as_str).collect::<Vec<_>>().join("+"),
        )),
    }
}
