use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::invoice::errors::InvoiceError;
use business::domain::invoice::model::Invoice;
use business::domain::invoice::repository::InvoiceRepository;
use business::domain::shared::value_objects::UserId;

use super::queries;

pub struct InvoiceRepositoryPostgres {
    pool: PgPool,
}

impl InvoiceRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceRepository for InvoiceRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Invoice, InvoiceError> {
        queries::by_id(&self.pool, id)
            .await?
            .ok_or(InvoiceError::NotFound)
    }

    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Invoice>, InvoiceError> {
        Ok(queries::by_user(&self.pool, user_id).await?)
    }

    async fn get_by_order(&self, order_id: Uuid) -> Result<Invoice, InvoiceError> {
        queries::by_order(&self.pool, order_id)
            .await?
            .ok_or(InvoiceError::NotFound)
    }
}
