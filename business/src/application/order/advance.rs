use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::model::Address;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::advance::{AdvanceOrderParams, AdvanceOrderUseCase};

pub struct AdvanceOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AdvanceOrderUseCase for AdvanceOrderUseCaseImpl {
    async fn execute(&self, params: AdvanceOrderParams) -> Result<Order, OrderError> {
        self.logger.info(&format!(
            "Advancing order {} to status {}",
            params.id, params.status
        ));

        let address = params.address.map(Address::new).transpose()?;

        let order = self
            .repository
            .advance(params.id, params.status, address)
            .await?;

        self.logger.info(&format!(
            "Order {} advanced to status {}",
            order.id, order.status
        ));
        Ok(order)
    }
}
