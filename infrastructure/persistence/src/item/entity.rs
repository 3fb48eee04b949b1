use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::shared::money::{Currency, Money};

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub order_id: Uuid,
    pub quantity: i64,
    pub price_units: i64,
    pub price_currency: String,
}

impl ItemEntity {
    pub fn into_domain(self) -> Result<Item, RepositoryError> {
        let currency = self
            .price_currency
            .parse::<Currency>()
            .map_err(|_| RepositoryError::Integrity)?;

        Ok(Item::from_repository(
            self.id,
            self.product_id,
            self.order_id,
            self.quantity,
            Money::new(self.price_units, currency),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_entity_to_domain_item() {
        let entity = ItemEntity {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            order_id: Uuid::new_v4(),
            quantity: 4,
            price_units: 1250,
            price_currency: "BGN".to_string(),
        };

        let item = entity.into_domain().unwrap();

        assert_eq!(item.quantity, 4);
        assert_eq!(item.unit_price, Money::new(1250, Currency::Bgn));
    }

    #[test]
    fn should_fail_on_unknown_currency_code() {
        let entity = ItemEntity {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            order_id: Uuid::new_v4(),
            quantity: 1,
            price_units: 100,
            price_currency: "credits".to_string(),
        };

        assert!(matches!(
            entity.into_domain().unwrap_err(),
            RepositoryError::Integrity
        ));
    }
}
