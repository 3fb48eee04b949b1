use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::model::Item;
use crate::domain::order::errors::OrderError;
use crate::domain::shared::value_objects::UserId;

pub struct AddCartItemParams {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub quantity: i64,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<Item, OrderError>;
}
