use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::model::Invoice;
use crate::domain::invoice::repository::InvoiceRepository;
use crate::domain::invoice::use_cases::get_by_order::GetInvoiceByOrderUseCase;
use crate::domain::logger::Logger;

pub struct GetInvoiceByOrderUseCaseImpl {
    pub repository: Arc<dyn InvoiceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetInvoiceByOrderUseCase for GetInvoiceByOrderUseCaseImpl {
    async fn execute(&self, order_id: Uuid) -> Result<Invoice, InvoiceError> {
        self.logger
            .info(&format!("Fetching invoice for order: {}", order_id));

        self.repository.get_by_order(order_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::model::Order;
    use crate::domain::shared::money::{Currency, Money};
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub InvoiceRepo {}

        #[async_trait]
        impl InvoiceRepository for InvoiceRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Invoice, InvoiceError>;
            async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Invoice>, InvoiceError>;
            async fn get_by_order(&self, order_id: Uuid) -> Result<Invoice, InvoiceError>;
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
    async fn should_return_invoice_for_order() {
        let mut mock_repo = MockInvoiceRepo::new();
        mock_repo.expect_get_by_order().returning(|_| {
            Ok(Invoice::new(
                UserId::new("user-1"),
                Order::new_cart(UserId::new("user-1")),
                Money::new(1000, Currency::Bgn),
            ))
        });

        let use_case = GetInvoiceByOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let invoice = use_case.execute(Uuid::new_v4()).await.unwrap();

        assert_eq!(invoice.total_price, Money::new(1000, Currency::Bgn));
    }

    #[tokio::test]
    async fn should_return_not_found_when_order_was_never_invoiced() {
        let mut mock_repo = MockInvoiceRepo::new();
        mock_repo
            .expect_get_by_order()
            .returning(|_| Err(InvoiceError::NotFound));

        let use_case = GetInvoiceByOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), InvoiceError::NotFound));
    }
}
