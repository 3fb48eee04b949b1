use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::model::Address;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};
use crate::domain::order::value_objects::OrderStatus;

pub struct CreateOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateOrderUseCase for CreateOrderUseCaseImpl {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError> {
        self.logger
            .info(&format!("Creating order for user: {}", params.user_id));

        let address = params.address.map(Address::new).transpose()?;
        let status = params.status.unwrap_or(OrderStatus::InCart);
        let order = Order::new(params.user_id, status, address);

        let created = self.repository.create(order).await?;

        self.logger.info(&format!("Order created: {}", created.id));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::model::NewAddressProps;
    use crate::domain::item::model::Item;
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
    async fn should_default_new_orders_to_in_cart() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_create()
            .withf(|order| order.status == OrderStatus::InCart && order.address.is_none())
            .returning(Ok);

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let order = use_case
            .execute(CreateOrderParams {
                user_id: UserId::new("user-1"),
                status: None,
                address: None,
            })
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::InCart);
    }

    #[tokio::test]
    async fn should_attach_validated_address() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_create()
            .withf(|order| {
                order
                    .address
                    .as_ref()
                    .is_some_and(|address| address.city == "Sofia")
            })
            .returning(Ok);

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateOrderParams {
                user_id: UserId::new("user-1"),
                status: Some(OrderStatus::InCart),
                address: Some(NewAddressProps {
                    city: "Sofia".to_string(),
                    country: "Bulgaria".to_string(),
                    street: "1 Vitosha Blvd".to_string(),
                    postal_code: "1000".to_string(),
                }),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_malformed_address_before_touching_the_store() {
        let mock_repo = MockOrderRepo::new();

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateOrderParams {
                user_id: UserId::new("user-1"),
                status: None,
                address: Some(NewAddressProps {
                    city: "".to_string(),
                    country: "Bulgaria".to_string(),
                    street: "1 Vitosha Blvd".to_string(),
                    postal_code: "1000".to_string(),
                }),
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::Address(_)));
    }
}
