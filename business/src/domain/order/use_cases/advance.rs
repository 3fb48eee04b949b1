use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::address::model::NewAddressProps;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::OrderStatus;

pub struct AdvanceOrderParams {
    pub id: Uuid,
    pub status: OrderStatus,
    pub address: Option<NewAddressProps>,
}

#[async_trait]
pub trait AdvanceOrderUseCase: Send + Sync {
    /// Moves an order one step through its lifecycle, triggering checkout
    /// side effects on its first departure from the cart.
    async fn execute(&self, params: AdvanceOrderParams) -> Result<Order, OrderError>;
}
