use async_trait::async_trait;

use crate::domain::address::model::NewAddressProps;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::OrderStatus;
use crate::domain::shared::value_objects::UserId;

pub struct CreateOrderParams {
    pub user_id: UserId,
    /// Defaults to `InCart` when absent.
    pub status: Option<OrderStatus>,
    pub address: Option<NewAddressProps>,
}

#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError>;
}
