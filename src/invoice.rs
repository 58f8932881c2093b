//! Invoice
//!
//! Fixed width text receipt for a cart. An [`Invoice`] is a snapshot: it
//! copies every figure it prints out of the cart, so rendering never touches
//! the cart again and always produces the same text.

use std::{fmt, io};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{cart::ShoppingCart, prices::format_amount};

const BORDER: &str = "+------------------------------------------------+----------+";

/// Errors that can occur when writing an invoice.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// The output could not be written.
    #[error("failed to write invoice: {0}")]
    Io(#[from] io::Error),
}

/// One content row of an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceLine {
    /// Product name, promotion label or coupon summary
    pub label: String,

    /// Units, only set on product rows
    pub quantity: Option<u32>,

    /// Amount printed in the price column; discounts are negative
    pub amount: Decimal,
}

impl InvoiceLine {
    fn new(label: impl Into<String>, quantity: Option<u32>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            quantity,
            amount,
        }
    }
}

/// Invoice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    lines: Vec<InvoiceLine>,
    total: Decimal,
}

impl Invoice {
    /// Snapshot the rows of an invoice from the cart's current state.
    pub fn from_cart(cart: &ShoppingCart<'_>) -> Self {
        let mut lines = Vec::with_capacity(cart.len() * 2 + 1);

        for item in cart.items() {
            lines.push(InvoiceLine::new(
                item.product().name(),
                Some(item.count()),
                item.price_without_discount(),
            ));

            if item.is_discounted() {
                lines.push(InvoiceLine::new(
                    format!("  ({})", item.discount_label()),
                    None,
                    -item.discount(),
                ));
            }
        }

        let coupon_discount = cart.coupon_discount();

        if !coupon_discount.is_zero() {
            let coupon = cart.coupon();

            lines.push(InvoiceLine::new(
                format!("Coupon {} - {}", coupon.name(), coupon.description()),
                None,
                -coupon_discount,
            ));
        }

        Self {
            lines,
            total: cart.total(),
        }
    }

    /// Content rows between the header and the footer.
    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Amount printed in the `TOTAL` row.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Writes the invoice to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::Io`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), InvoiceError> {
        write!(out, "{self}")?;

        Ok(())
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BORDER}")?;
        write_row(f, "Name", "qty", "price")?;
        writeln!(f, "{BORDER}")?;

        for line in &self.lines {
            let quantity = line.quantity.map_or_else(String::new, |q| q.to_string());

            write_row(f, &line.label, &quantity, &format_amount(line.amount))?;
        }

        writeln!(f, "{BORDER}")?;
        write_row(f, "TOTAL", "", &format_amount(self.total))?;
        writeln!(f, "{BORDER}")
    }
}

fn write_row(out: &mut impl fmt::Write, label: &str, quantity: &str, amount: &str) -> fmt::Result {
    writeln!(out, "| {label:<40} {quantity:>5} | {amount:>8} |")
}
