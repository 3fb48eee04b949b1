use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::invoice::model::Invoice;

use crate::api::order::dto::OrderResponse;
use crate::api::shared::MoneyDto;

#[derive(Debug, Clone, Object)]
pub struct InvoiceResponse {
    /// Invoice unique identifier
    pub id: String,
    /// Billed user
    pub user_id: String,
    /// Snapshot of the invoiced order
    pub order: OrderResponse,
    /// Total over all order items at checkout time
    pub total_price: MoneyDto,
    /// Issuance timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id.to_string(),
            user_id: invoice.user_id.to_string(),
            order: invoice.order.into(),
            total_price: invoice.total_price.into(),
            created_at: invoice.created_at,
        }
    }
}
