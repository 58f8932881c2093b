//! Inventory
//!
//! Registry of the products and coupons a store sells, and the factory for
//! the carts that price them.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::ShoppingCart,
    coupons::{Coupon, CouponSpec},
    prices::Price,
    products::{Product, ProductKey},
    promotions::{Promotion, PromotionSpec},
};

/// Longest product name, in characters.
pub const MAX_NAME_LENGTH: usize = 40;

/// Errors raised while registering or looking up inventory entries.
#[derive(Debug, Error, PartialEq)]
pub enum InventoryError {
    /// A product with this name is already registered.
    #[error("product {0:?} is already registered")]
    DuplicateProduct(String),

    /// The product name is longer than [`MAX_NAME_LENGTH`] characters.
    #[error("product name {0:?} is longer than 40 characters")]
    InvalidName(String),

    /// The price is outside the accepted catalog range.
    #[error("price {0} is outside the range 0.01..=999.99")]
    PriceOutOfRange(Decimal),

    /// No product with this name is registered.
    #[error("product {0:?} does not exist")]
    ProductNotFound(String),

    /// The coupon kind is neither `percent` nor `amount`.
    #[error("unknown coupon type: {0}")]
    UnknownCouponType(String),

    /// The promotion parameters cannot produce a sane discount.
    #[error("invalid promotion: {0}")]
    InvalidPromotion(String),

    /// A coupon with this name is already registered.
    #[error("coupon {0:?} is already registered")]
    DuplicateCoupon(String),
}

/// Inventory
#[derive(Debug)]
pub struct Inventory {
    products: SlotMap<ProductKey, Product>,
    product_keys: FxHashMap<String, ProductKey>,
    coupons: Vec<Coupon>,
    coupon_keys: FxHashMap<String, usize>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self {
            products: SlotMap::with_key(),
            product_keys: FxHashMap::default(),
            coupons: Vec::new(),
            coupon_keys: FxHashMap::default(),
        }
    }

    /// Register a product.
    ///
    /// # Errors
    ///
    /// - [`InventoryError::DuplicateProduct`]: the name is already taken.
    /// - [`InventoryError::InvalidName`]: the name is longer than [`MAX_NAME_LENGTH`].
    /// - [`InventoryError::PriceOutOfRange`]: the price is outside 0.01..=999.99.
    /// - [`InventoryError::InvalidPromotion`]: the promotion parameters are unusable.
    pub fn register(
        &mut self,
        name: &str,
        price: Decimal,
        promotion: PromotionSpec,
    ) -> Result<ProductKey, InventoryError> {
        if self.product_keys.contains_key(name) {
            return Err(InventoryError::DuplicateProduct(name.to_string()));
        }

        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(InventoryError::InvalidName(name.to_string()));
        }

        let price = Price::new(price).map_err(|_err| InventoryError::PriceOutOfRange(price))?;
        let promotion = Promotion::try_from(promotion)?;

        debug!(product = name, %price, promotion = %promotion, "registered product");

        let key = self.products.insert(Product::new(name, price, promotion));
        self.product_keys.insert(name.to_string(), key);

        Ok(key)
    }

    /// Register a coupon.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::DuplicateCoupon`] if a coupon with this name exists.
    pub fn register_coupon(&mut self, name: &str, spec: CouponSpec) -> Result<(), InventoryError> {
        if self.coupon_keys.contains_key(name) {
            return Err(InventoryError::DuplicateCoupon(name.to_string()));
        }

        debug!(coupon = name, ?spec, "registered coupon");

        self.coupon_keys.insert(name.to_string(), self.coupons.len());
        self.coupons.push(Coupon::new(name, spec));

        Ok(())
    }

    /// Look up a product by name.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] if no such product exists.
    pub fn lookup_product(&self, name: &str) -> Result<&Product, InventoryError> {
        self.resolve(name).map(|(_key, product)| product)
    }

    /// Look up a product and its key by name.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] if no such product exists.
    pub fn resolve(&self, name: &str) -> Result<(ProductKey, &Product), InventoryError> {
        self.product_keys
            .get(name)
            .and_then(|&key| self.products.get(key).map(|product| (key, product)))
            .ok_or_else(|| InventoryError::ProductNotFound(name.to_string()))
    }

    /// Look up a coupon by name, falling back to [`Coupon::Nil`] for unknown names.
    pub fn lookup_coupon(&self, name: &str) -> Coupon {
        self.coupon_keys
            .get(name)
            .and_then(|&idx| self.coupons.get(idx))
            .cloned()
            .unwrap_or_default()
    }

    /// Start a new, empty cart priced against this inventory.
    pub fn new_cart(&self) -> ShoppingCart<'_> {
        ShoppingCart::new(self)
    }

    /// Iterate over the products in registration order.
    pub fn products(&self) -> impl Iterator<Item = (ProductKey, &Product)> {
        self.products.iter()
    }

    /// Iterate over the coupons in registration order.
    pub fn coupons(&self) -> impl Iterator<Item = &Coupon> {
        self.coupons.iter()
    }

    /// Number of registered products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether no products are registered.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
