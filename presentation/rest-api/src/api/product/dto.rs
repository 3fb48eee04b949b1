use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

use crate::api::shared::MoneyDto;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Optional free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price
    pub price: MoneyDto,
    /// Stock quantity (must be positive)
    pub quantity: i64,
    /// Whether the product is listed; defaults to true
    #[oai(skip_serializing_if_is_none)]
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct RateProductRequest {
    /// Rating value between 0 and 5
    pub rating: i64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Selling user
    pub user_id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub price: MoneyDto,
    pub quantity: i64,
    pub available: bool,
    /// Running average of all ratings
    pub rating: f64,
    pub ratings_count: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            user_id: product.user_id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price.into(),
            quantity: product.quantity,
            available: product.available,
            rating: product.rating,
            ratings_count: product.ratings_count,
            created_at: product.created_at,
        }
    }
}
