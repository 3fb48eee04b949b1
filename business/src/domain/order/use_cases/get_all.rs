use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::OrderStatus;
use crate::domain::shared::value_objects::UserId;

pub struct ListOrdersParams {
    pub user_id: UserId,
    pub status: Option<OrderStatus>,
}

#[async_trait]
pub trait ListOrdersUseCase: Send + Sync {
    async fn execute(&self, params: ListOrdersParams) -> Result<Vec<Order>, OrderError>;
}
