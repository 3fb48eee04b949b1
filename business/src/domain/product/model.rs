use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::rating::RatingAggregate;
use crate::domain::shared::money::Money;
use crate::domain::shared::value_objects::UserId;

const MAX_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub quantity: i64,
    pub available: bool,
    /// Running average of all ratings, maintained incrementally.
    pub rating: f64,
    pub ratings_count: i64,
    pub created_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub quantity: i64,
    pub available: bool,
}

impl Product {
    /// A new product starts with an empty rating aggregate; the aggregate is
    /// only ever changed through the rating operations.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let name = props.name.trim().to_string();
        if name.is_empty() || name.len() > MAX_NAME_LENGTH {
            return Err(ProductError::NameEmpty);
        }

        if !props.price.is_positive() {
            return Err(ProductError::InvalidPrice);
        }

        if props.quantity <= 0 {
            return Err(ProductError::InvalidQuantity);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            name,
            description: props.description,
            price: props.price,
            quantity: props.quantity,
            available: props.available,
            rating: 0.0,
            ratings_count: 0,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: String,
        description: Option<String>,
        price: Money,
        quantity: i64,
        available: bool,
        rating: f64,
        ratings_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            description,
            price,
            quantity,
            available,
            rating,
            ratings_count,
            created_at,
        }
    }

    pub fn rating_aggregate(&self) -> RatingAggregate {
        RatingAggregate {
            average: self.rating,
            count: self.ratings_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::money::Currency;

    fn props() -> NewProductProps {
        NewProductProps {
            user_id: UserId::new("seller-1"),
            name: "Mechanical Keyboard".to_string(),
            description: Some("Tenkeyless, brown switches".to_string()),
            price: Money::new(18900, Currency::Bgn),
            quantity: 10,
            available: true,
        }
    }

    #[test]
    fn should_create_product_with_empty_rating_aggregate() {
        let product = Product::new(props()).unwrap();

        assert_eq!(product.rating, 0.0);
        assert_eq!(product.ratings_count, 0);
    }

    #[test]
    fn should_reject_blank_name() {
        let result = Product::new(NewProductProps {
            name: "   ".to_string(),
            ..props()
        });
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_reject_non_positive_price() {
        let result = Product::new(NewProductProps {
            price: Money::new(0, Currency::Bgn),
            ..props()
        });
        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }

    #[test]
    fn should_reject_non_positive_quantity() {
        let result = Product::new(NewProductProps {
            quantity: 0,
            ..props()
        });
        assert!(matches!(result.unwrap_err(), ProductError::InvalidQuantity));
    }
}
