use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::address::model::Address;
use business::domain::errors::RepositoryError;
use business::domain::invoice::model::Invoice;
use business::domain::order::model::Order;
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::money::{Currency, Money};
use business::domain::shared::value_objects::UserId;

/// One row of the invoices/orders/addresses join. The embedded order is the
/// snapshot referenced by the invoice; its items are not loaded here.
#[derive(Debug, FromRow)]
pub struct InvoiceEntity {
    pub id: Uuid,
    pub user_id: String,
    pub total_units: i64,
    pub total_currency: String,
    pub created_at: DateTime<Utc>,
    pub order_id: Uuid,
    pub order_user_id: String,
    pub order_status: i16,
    pub order_created_at: DateTime<Utc>,
    pub order_latest_update: DateTime<Utc>,
    pub address_id: Option<Uuid>,
    pub address_city: Option<String>,
    pub address_country: Option<String>,
    pub address_street: Option<String>,
    pub address_postal_code: Option<String>,
}

impl InvoiceEntity {
    pub fn into_domain(self) -> Result<Invoice, RepositoryError> {
        let currency = self
            .total_currency
            .parse::<Currency>()
            .map_err(|_| RepositoryError::Integrity)?;
        let status =
            OrderStatus::from_code(self.order_status).ok_or(RepositoryError::Integrity)?;

        let address = match (
            self.address_id,
            self.address_city,
            self.address_country,
            self.address_street,
            self.address_postal_code,
        ) {
            (Some(id), Some(city), Some(country), Some(street), Some(postal_code)) => Some(
                Address::from_repository(id, city, country, street, postal_code),
            ),
            _ => None,
        };

        let order = Order::from_repository(
            self.order_id,
            UserId::new(self.order_user_id),
            Vec::new(),
            status,
            address,
            self.order_created_at,
            self.order_latest_update,
        );

        Ok(Invoice::from_repository(
            self.id,
            UserId::new(self.user_id),
            order,
            Money::new(self.total_units, currency),
            self.created_at,
        ))
    }
}
