//! Shopping cart

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    coupons::Coupon,
    inventory::{Inventory, InventoryError},
    invoice::Invoice,
    items::LineItem,
};

/// Most units of one product a cart may hold.
pub const MAX_LINE_ITEM_COUNT: u32 = 99;

/// Errors related to cart contents.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Product lookup failed.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// The quantity is zero or would push the line past [`MAX_LINE_ITEM_COUNT`].
    #[error("cannot add {requested} x {product} ({current} already in cart, lines hold 1..=99)")]
    InvalidQuantity {
        /// Product name
        product: String,

        /// Units already in the cart
        current: u32,

        /// Units being added
        requested: u32,
    },
}

/// Shopping cart
///
/// Line items keep the order in which their products were first added.
#[derive(Debug, Clone)]
pub struct ShoppingCart<'a> {
    inventory: &'a Inventory,
    items: Vec<LineItem<'a>>,
    coupon: Coupon,
}

impl<'a> ShoppingCart<'a> {
    /// Create an empty cart priced against `inventory`.
    pub fn new(inventory: &'a Inventory) -> Self {
        ShoppingCart {
            inventory,
            items: Vec::new(),
            coupon: Coupon::Nil,
        }
    }

    /// Add `count` units of the named product.
    ///
    /// Units of a product already in the cart are merged into its existing line.
    /// A failed call leaves the cart unchanged.
    ///
    /// # Errors
    ///
    /// - [`CartError::Inventory`]: the product is not registered.
    /// - [`CartError::InvalidQuantity`]: `count` is zero or the line would exceed
    ///   [`MAX_LINE_ITEM_COUNT`] units.
    pub fn add(&mut self, product_name: &str, count: u32) -> Result<(), CartError> {
        let inventory = self.inventory;
        let (key, product) = inventory.resolve(product_name)?;

        if let Some(item) = self.items.iter_mut().find(|item| item.key() == key) {
            item.increase(count)?;
        } else {
            self.items.push(LineItem::new(key, product, count)?);
        }

        debug!(product = product_name, count, "added to cart");

        Ok(())
    }

    /// Add a single unit of the named product.
    ///
    /// # Errors
    ///
    /// See [`ShoppingCart::add`].
    pub fn add_one(&mut self, product_name: &str) -> Result<(), CartError> {
        self.add(product_name, 1)
    }

    /// Apply the named coupon, replacing any coupon applied before.
    ///
    /// Unknown names apply [`Coupon::Nil`].
    pub fn apply_coupon(&mut self, coupon_name: &str) {
        self.coupon = self.inventory.lookup_coupon(coupon_name);

        if self.coupon.is_nil() {
            debug!(coupon = coupon_name, "unknown coupon, no order discount");
        } else {
            debug!(coupon = coupon_name, "applied coupon");
        }
    }

    /// Sum of the post-promotion line prices; zero for an empty cart.
    pub fn items_subtotal(&self) -> Decimal {
        self.items.iter().map(LineItem::price).sum()
    }

    /// Discount granted by the applied coupon.
    pub fn coupon_discount(&self) -> Decimal {
        self.coupon.discount(self.items_subtotal())
    }

    /// Amount to pay.
    ///
    /// Not clamped: a percent coupon above 100 yields a negative total. Only
    /// saturates at the limits of [`Decimal`].
    pub fn total(&self) -> Decimal {
        let subtotal = self.items_subtotal();

        subtotal.saturating_sub(self.coupon.discount(subtotal))
    }

    /// Iterate over the line items in display order.
    pub fn items(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.items.iter()
    }

    /// The applied coupon.
    pub fn coupon(&self) -> &Coupon {
        &self.coupon
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the invoice for the cart's current contents.
    pub fn invoice(&self) -> String {
        Invoice::from_cart(self).to_string()
    }
}
