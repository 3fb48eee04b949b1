use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_all::{ListOrdersParams, ListOrdersUseCase};

pub struct ListOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListOrdersUseCase for ListOrdersUseCaseImpl {
    async fn execute(&self, params: ListOrdersParams) -> Result<Vec<Order>, OrderError> {
        self.logger
            .info(&format!("Listing orders for user: {}", params.user_id));

        match params.status {
            Some(status) => {
                self.repository
                    .get_by_user_and_status(&params.user_id, status)
                    .await
            }
            None => self.repository.get_by_user(&params.user_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::model::Address;
    use crate::domain::item::model::Item;
    use crate::domain::order::value_objects::OrderStatus;
    use crate::domain::shared::value_objects::UserId;
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
    async fn should_list_all_orders_when_no_status_filter() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_user()
            .returning(|user_id| Ok(vec![Order::new_cart(user_id.clone())]));

        let use_case = ListOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let orders = use_case
            .execute(ListOrdersParams {
                user_id: UserId::new("user-1"),
                status: None,
            })
            .await
            .unwrap();

        assert_eq!(orders.len(), 1);
    }

    #[tokio::test]
    async fn should_filter_by_status_when_requested() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_user_and_status()
            .withf(|_, status| *status == OrderStatus::Completed)
            .returning(|_, _| Ok(Vec::new()));

        let use_case = ListOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let orders = use_case
            .execute(ListOrdersParams {
                user_id: UserId::new("user-1"),
                status: Some(OrderStatus::Completed),
            })
            .await
            .unwrap();

        assert!(orders.is_empty());
    }
}
