use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::list_cart_items::ListCartItemsUseCase;
use crate::domain::shared::value_objects::UserId;

pub struct ListCartItemsUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCartItemsUseCase for ListCartItemsUseCaseImpl {
    async fn execute(&self, user_id: UserId) -> Result<Order, OrderError> {
        self.logger
            .info(&format!("Listing cart items for user: {}", user_id));

        let mut cart = self.repository.get_or_create_cart(&user_id).await?;
        cart.items = self.repository.items_by_order(cart.id).await?;

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::model::Address;
    use crate::domain::item::model::Item;
    use crate::domain::order::value_objects::OrderStatus;
    use crate::domain::shared::money::{Currency, Money};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Order, OrderError>;
            async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError>;
            async fn get_by_user_and_status(&self, user_id: &UserId, status: OrderStatus) -> Result<Vec<Order>, OrderError>;
            async fn get_or_create_cart(&self, user_id: &UserId) -> Result<Order, OrderError>;
            async fn items_by_order(&self, order_id: Uuid) -> Result<Vec<Item>, OrderError>;
            async fn create(&self, order: Order) -> Result<Order, OrderError>;
            async fn add_item(&self, user_id: &UserId, product_id: Uuid, quantity: i64) -> Result<Item, OrderError>;
            async fn remove_item(&self, user_id: &UserId, item_id: Uuid) -> Result<(), OrderError>;
            async fn advance(&self, id: Uuid, status: OrderStatus, address: Option<Address>) -> Result<Order, OrderError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_load_items_into_cart() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_or_create_cart()
            .returning(|user_id| Ok(Order::new_cart(user_id.clone())));
        mock_repo.expect_items_by_order().returning(|order_id| {
            Ok(vec![
                Item::new(
                    Uuid::new_v4(),
                    order_id,
                    2,
                    Money::new(500, Currency::Bgn),
                )
                .unwrap(),
            ])
        });

        let use_case = ListCartItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case.execute(UserId::new("user-1")).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].order_id, cart.id);
    }
}
