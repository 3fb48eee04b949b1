use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::money::Money;
use crate::domain::shared::value_objects::UserId;

pub struct CreateProductParams {
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub quantity: i64,
    pub available: bool,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
