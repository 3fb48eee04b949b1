use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::model::Invoice;

#[async_trait]
pub trait GetInvoiceByOrderUseCase: Send + Sync {
    async fn execute(&self, order_id: Uuid) -> Result<Invoice, InvoiceError>;
}
