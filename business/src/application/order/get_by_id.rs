use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_by_id::GetOrderByIdUseCase;

pub struct GetOrderByIdUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderByIdUseCase for GetOrderByIdUseCaseImpl {
    async fn execute(&self, id: Uuid) -> Result<Order, OrderError> {
        self.logger.info(&format!("Fetching order: {}", id));

        self.repository.get_by_id(id).await
    }
}
