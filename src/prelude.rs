//! Checkout prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartError, MAX_LINE_ITEM_COUNT, ShoppingCart},
    catalog::Catalog,
    coupons::{Coupon, CouponSpec},
    fixtures::{Fixture, FixtureError},
    inventory::{Inventory, InventoryError, MAX_NAME_LENGTH},
    invoice::{Invoice, InvoiceError, InvoiceLine},
    items::LineItem,
    prices::{Price, PriceError, format_amount},
    products::{Product, ProductKey},
    promotions::{Promotion, PromotionSpec},
};
