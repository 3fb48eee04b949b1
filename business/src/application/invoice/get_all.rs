use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::model::Invoice;
use crate::domain::invoice::repository::InvoiceRepository;
use crate::domain::invoice::use_cases::get_all::ListInvoicesUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

pub struct ListInvoicesUseCaseImpl {
    pub repository: Arc<dyn InvoiceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListInvoicesUseCase for ListInvoicesUseCaseImpl {
    async fn execute(&self, user_id: UserId) -> Result<Vec<Invoice>, InvoiceError> {
        self.logger
            .info(&format!("Listing invoices for user: {}", user_id));

        self.repository.get_by_user(&user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::model::Order;
    use crate::domain::shared::money::{Currency, Money};
    use mockall::mock;
    use uuid::Uuid;

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
    async fn should_list_user_invoices() {
        let mut mock_repo = MockInvoiceRepo::new();
        mock_repo.expect_get_by_user().returning(|user_id| {
            Ok(vec![Invoice::new(
                user_id.clone(),
                Order::new_cart(user_id.clone()),
                Money::new(500, Currency::Bgn),
            )])
        });

        let use_case = ListInvoicesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let invoices = use_case.execute(UserId::new("user-1")).await.unwrap();

        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].user_id, UserId::new("user-1"));
    }
}
