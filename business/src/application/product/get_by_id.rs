use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::GetProductByIdUseCase;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, id: Uuid) -> Result<Product, ProductError> {
        self.logger.info(&format!("Fetching product: {}", id));

        self.repository.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::rating::Rating;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Product, ProductError>;
            async fn create(&self, product: &Product) -> Result<(), ProductError>;
            async fn add_or_update_rating(&self, rating: Rating) -> Result<Product, ProductError>;
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
    async fn should_return_not_found_when_product_does_not_exist() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(ProductError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
