use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::rating::Rating;
use business::domain::shared::money::{Currency, Money};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price_units: i64,
    pub price_currency: String,
    pub quantity: i64,
    pub available: bool,
    pub rating: f64,
    pub ratings_count: i64,
    pub created_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let currency = self
            .price_currency
            .parse::<Currency>()
            .map_err(|_| RepositoryError::Integrity)?;

        Ok(Product::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.name,
            self.description,
            Money::new(self.price_units, currency),
            self.quantity,
            self.available,
            self.rating,
            self.ratings_count,
            self.created_at,
        ))
    }
}

#[derive(Debug, FromRow)]
pub struct RatingEntity {
    pub user_id: String,
    pub product_id: Uuid,
    pub rating: i64,
}

impl RatingEntity {
    pub fn into_domain(self) -> Rating {
        Rating {
            user_id: UserId::new(self.user_id),
            product_id: self.product_id,
            value: self.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_entity_to_domain_product() {
        let entity = ProductEntity {
            id: Uuid::new_v4(),
            user_id: "seller-1".to_string(),
            name: "Trail Map".to_string(),
            description: None,
            price_units: 850,
            price_currency: "EUR".to_string(),
            quantity: 12,
            available: true,
            rating: 4.5,
            ratings_count: 2,
            created_at: Utc::now(),
        };

        let product = entity.into_domain().unwrap();

        assert_eq!(product.price, Money::new(850, Currency::Eur));
        assert_eq!(product.rating_aggregate().count, 2);
    }
}
