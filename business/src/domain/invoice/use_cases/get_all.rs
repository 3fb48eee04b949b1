use async_trait::async_trait;

use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::model::Invoice;
use crate::domain::shared::value_objects::UserId;

#[async_trait]
pub trait ListInvoicesUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<Invoice>, InvoiceError>;
}
