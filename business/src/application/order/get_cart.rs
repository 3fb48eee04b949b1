use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_cart::GetCartUseCase;
use crate::domain::shared::value_objects::UserId;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, user_id: UserId) -> Result<Order, OrderError> {
        self.logger
            .info(&format!("Fetching cart for user: {}", user_id));

        let cart = self.repository.get_or_create_cart(&user_id).await?;

        self.logger.info(&format!("Cart ready: {}", cart.id));
        Ok(cart)
    }
}
