use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::rating::Rating;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::rate::{RateProductParams, RateProductUseCase};

pub struct RateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RateProductUseCase for RateProductUseCaseImpl {
    async fn execute(&self, params: RateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "User {} rating product {} with {}",
            params.user_id, params.product_id, params.value
        ));

        let rating = Rating::new(params.user_id, params.product_id, params.value)?;

        let product = self.repository.add_or_update_rating(rating).await?;

        self.logger.info(&format!(
            "Product {} rating now {:.2} over {} ratings",
            product.id, product.rating, product.ratings_count
        ));
        Ok(product)
    }
}
