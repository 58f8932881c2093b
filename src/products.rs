//! Products

use slotmap::new_key_type;

use crate::{prices::Price, promotions::Promotion};

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Product
///
/// Immutable once registered; carts only ever borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: Price,
    promotion: Promotion,
}

impl Product {
    pub(crate) fn new(name: impl Into<String>, price: Price, promotion: Promotion) -> Self {
        Product {
            name: name.into(),
            price,
            promotion,
        }
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price
    pub fn price(&self) -> Price {
        self.price
    }

    /// Promotion applied to every line item of this product
    pub fn promotion(&self) -> &Promotion {
        &self.promotion
    }
}
