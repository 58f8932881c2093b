//! Catalog
//!
//! Tabular listing of what an [`Inventory`] sells.

use std::fmt;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::{coupons::Coupon, inventory::Inventory};

/// Printable view of an inventory's products and coupons.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    inventory: &'a Inventory,
}

impl<'a> Catalog<'a> {
    /// Create a catalog view over `inventory`.
    pub fn new(inventory: &'a Inventory) -> Self {
        Self { inventory }
    }

    /// Products table: name, price and promotion label.
    pub fn products_table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["Product", "Price", "Promotion"]);

        for (_key, product) in self.inventory.products() {
            builder.push_record([
                product.name().to_string(),
                product.price().to_string(),
                product.promotion().label(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..2), Alignment::right());

        table.to_string()
    }

    /// Coupons table: code and description.
    pub fn coupons_table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["Coupon", "Discount"]);

        for coupon in self.inventory.coupons() {
            builder.push_record([coupon.name().to_string(), coupon_summary(coupon)]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());

        table.to_string()
    }
}

impl fmt::Display for Catalog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.products_table())?;

        if self.inventory.coupons().next().is_some() {
            writeln!(f, "{}", self.coupons_table())?;
        }

        Ok(())
    }
}

/// Description with the invoice column padding squeezed out.
fn coupon_summary(coupon: &Coupon) -> String {
    coupon
        .description()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
