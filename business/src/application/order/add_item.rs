use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::model::Item;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Item, OrderError> {
        self.logger.info(&format!(
            "Adding {} x product {} to cart of user {}",
            params.quantity, params.product_id, params.user_id
        ));

        if params.quantity <= 0 {
            return Err(OrderError::InvalidQuantity);
        }

        let item = self
            .repository
            .add_item(&params.user_id, params.product_id, params.quantity)
            .await?;

        self.logger.info(&format!(
            "Cart item {} now holds quantity {}",
            item.id, item.quantity
        ));
        Ok(item)
    }
}
