use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;

#[async_trait]
pub trait GetOrderByIdUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Order, OrderError>;
}
