use async_trait::async_trait;
use uuid::Uuid;

use super::errors::ProductError;
use super::model::Product;
use super::rating::Rating;

/// Persistence port for the product catalog and its rating aggregate.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Product, ProductError>;

    async fn create(&self, product: &Product) -> Result<(), ProductError>;

    /// Inserts the rating, or updates it in place when the user already rated
    /// the product, and maintains the product's running average in the same
    /// transaction. Returns the refreshed product.
    async fn add_or_update_rating(&self, rating: Rating) -> Result<Product, ProductError>;
}
