use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

pub struct RateProductParams {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub value: i64,
}

#[async_trait]
pub trait RateProductUseCase: Send + Sync {
    /// Records the user's rating for a product, replacing any previous one,
    /// and returns the product with its refreshed rating aggregate.
    async fn execute(&self, params: RateProductParams) -> Result<Product, ProductError>;
}
