use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

#[async_trait]
pub trait ListCartItemsUseCase: Send + Sync {
    /// Returns the user's open cart with its line items loaded.
    async fn execute(&self, user_id: UserId) -> Result<Order, OrderError>;
}
