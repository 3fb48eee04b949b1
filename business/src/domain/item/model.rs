use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::shared::money::Money;

/// A line item of an order. `unit_price` is a snapshot of the product price
/// taken when the item was added or last merged; later catalog price changes
/// never alter it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Uuid,
    pub product_id: Uuid,
    pub order_id: Uuid,
    pub quantity: i64,
    pub unit_price: Money,
}

impl Item {
    pub fn new(
        product_id: Uuid,
        order_id: Uuid,
        quantity: i64,
        unit_price: Money,
    ) -> Result<Self, OrderError> {
        if quantity <= 0 {
            return Err(OrderError::InvalidQuantity);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            product_id,
            order_id,
            quantity,
            unit_price,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        product_id: Uuid,
        order_id: Uuid,
        quantity: i64,
        unit_price: Money,
    ) -> Self {
        Self {
            id,
            product_id,
            order_id,
            quantity,
            unit_price,
        }
    }

    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_int(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::money::Currency;

    #[test]
    fn should_create_item_when_quantity_positive() {
        let item = Item::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            3,
            Money::new(250, Currency::Bgn),
        )
        .unwrap();

        assert_eq!(item.quantity, 3);
        assert_eq!(item.line_total(), Money::new(750, Currency::Bgn));
    }

    #[test]
    fn should_reject_zero_quantity() {
        let result = Item::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            0,
            Money::new(250, Currency::Bgn),
        );

        assert!(matches!(result.unwrap_err(), OrderError::InvalidQuantity));
    }

    #[test]
    fn should_reject_negative_quantity() {
        let result = Item::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            -2,
            Money::new(250, Currency::Bgn),
        );

        assert!(matches!(result.unwrap_err(), OrderError::InvalidQuantity));
    }
}
