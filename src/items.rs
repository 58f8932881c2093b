//! Items

use rust_decimal::Decimal;

use crate::{
    cart::{CartError, MAX_LINE_ITEM_COUNT},
    products::{Product, ProductKey},
};

/// A quantity of one product within a cart.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineItem<'a> {
    key: ProductKey,
    product: &'a Product,
    count: u32,
}

impl<'a> LineItem<'a> {
    /// Creates a new line item holding `count` units of `product`.
    pub(crate) fn new(key: ProductKey, product: &'a Product, count: u32) -> Result<Self, CartError> {
        let mut item = Self {
            key,
            product,
            count: 0,
        };

        item.increase(count)?;

        Ok(item)
    }

    /// Adds `count` more units, keeping the total within `1..=99`.
    pub(crate) fn increase(&mut self, count: u32) -> Result<(), CartError> {
        let total = self.count.saturating_add(count);

        if count == 0 || total > MAX_LINE_ITEM_COUNT {
            return Err(CartError::InvalidQuantity {
                product: self.product.name().to_string(),
                current: self.count,
                requested: count,
            });
        }

        self.count = total;

        Ok(())
    }

    /// Key of the product in its inventory
    pub fn key(&self) -> ProductKey {
        self.key
    }

    /// The product
    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// Number of units
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Unit price times count
    pub fn price_without_discount(&self) -> Decimal {
        self.product.price().amount() * Decimal::from(self.count)
    }

    /// Discount granted by the product's promotion
    pub fn discount(&self) -> Decimal {
        self.product
            .promotion()
            .discount(self.count, self.product.price().amount())
    }

    /// Price after the promotion
    pub fn price(&self) -> Decimal {
        self.price_without_discount() - self.discount()
    }

    /// Label of the product's promotion
    pub fn discount_label(&self) -> String {
        self.product.promotion().label()
    }

    /// Whether the promotion takes anything off this line
    pub fn is_discounted(&self) -> bool {
        !self.discount().is_zero()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{inventory::Inventory, promotions::PromotionSpec};

    use super::*;

    fn inventory() -> Result<Inventory, crate::inventory::InventoryError> {
        let mut inventory = Inventory::new();

        inventory.register("Matcha", Decimal::from(10), PromotionSpec::GetOneFree(3))?;
        inventory.register("Chai", Decimal::from(2), PromotionSpec::None)?;

        Ok(inventory)
    }

    #[test]
    fn prices_follow_the_promotion() -> TestResult {
        let inventory = inventory()?;
        let (key, product) = inventory.resolve("Matcha")?;
        let item = LineItem::new(key, product, 7)?;

        assert_eq!(item.price_without_discount(), Decimal::from(70));
        assert_eq!(item.discount(), Decimal::from(20));
        assert_eq!(item.price(), Decimal::from(50));
        assert_eq!(item.discount_label(), "buy 2, get 1 free");
        assert!(item.is_discounted());

        Ok(())
    }

    #[test]
    fn undiscounted_item_reports_no_discount() -> TestResult {
        let inventory = inventory()?;
        let (key, product) = inventory.resolve("Chai")?;
        let item = LineItem::new(key, product, 4)?;

        assert!(!item.is_discounted());
        assert_eq!(item.price(), Decimal::from(8));

        Ok(())
    }

    #[test]
    fn zero_count_is_rejected() -> TestResult {
        let inventory = inventory()?;
        let (key, product) = inventory.resolve("Chai")?;

        assert!(matches!(
            LineItem::new(key, product, 0),
            Err(CartError::InvalidQuantity { requested: 0, .. })
        ));

        Ok(())
    }

    #[test]
    fn increase_stops_at_ninety_nine() -> TestResult {
        let inventory = inventory()?;
        let (key, product) = inventory.resolve("Chai")?;
        let mut item = LineItem::new(key, product, 98)?;

        item.increase(1)?;

        assert_eq!(item.count(), 99);
        assert!(matches!(
            item.increase(1),
            Err(CartError::InvalidQuantity {
                current: 99,
                requested: 1,
                ..
            })
        ));
        assert_eq!(item.count(), 99);

        Ok(())
    }
}
