//! Checkout
//!
//! A small retail pricing engine: an [`Inventory`](inventory::Inventory) of
//! priced products carrying per-product promotions, a
//! [`ShoppingCart`](cart::ShoppingCart) that prices line items against it and
//! applies at most one coupon, and an [`Invoice`](invoice::Invoice) that renders
//! the result as a fixed width receipt.
//!
//! All amounts are exact decimals.

pub mod cart;
pub mod catalog;
pub mod coupons;
pub mod discounts;
pub mod fixtures;
pub mod inventory;
pub mod invoice;
pub mod items;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod promotions;
