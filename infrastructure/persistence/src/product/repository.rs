use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::rating::Rating;
use business::domain::product::repository::ProductRepository;

use super::queries;
use crate::db::run_in_transaction;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Product, ProductError> {
        queries::by_id(&self.pool, id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    async fn create(&self, product: &Product) -> Result<(), ProductError> {
        Ok(queries::insert(&self.pool, product).await?)
    }

    async fn add_or_update_rating(&self, rating: Rating) -> Result<Product, ProductError> {
        run_in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let product = queries::by_id_for_update(&mut *conn, rating.product_id)
                    .await?
                    .ok_or(ProductError::NotFound)?;

                let existing =
                    queries::rating_by_user_and_product(&mut *conn, &rating.user_id, rating.product_id)
                        .await?;

                let aggregate = match existing {
                    Some(previous) => {
                        queries::update_rating(&mut *conn, &rating).await?;
                        product
                            .rating_aggregate()
                            .apply_updated(previous.value, rating.value)
                    }
                    None => {
                        queries::insert_rating(&mut *conn, &rating).await?;
                        product.rating_aggregate().apply_new(rating.value)
                    }
                };

                queries::update_rating_aggregate(&mut *conn, rating.product_id, aggregate).await?;

                queries::by_id(&mut *conn, rating.product_id)
                    .await?
                    .ok_or(ProductError::NotFound)
            })
        })
        .await
    }
}
