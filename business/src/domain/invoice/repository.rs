use async_trait::async_trait;
use uuid::Uuid;

use super::errors::InvoiceError;
use super::model::Invoice;
use crate::domain::shared::value_objects::UserId;

/// Read-only persistence port for invoices. Invoice rows are written
/// exclusively by the order checkout transaction.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Invoice, InvoiceError>;
    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Invoice>, InvoiceError>;
    async fn get_by_order(&self, order_id: Uuid) -> Result<Invoice, InvoiceError>;
}
