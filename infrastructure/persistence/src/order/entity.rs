use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::address::model::Address;
use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::UserId;

/// One row of the orders/addresses left join. Address columns are absent for
/// carts created without a shipping address.
#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: String,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub latest_update: DateTime<Utc>,
    pub address_id: Option<Uuid>,
    pub address_city: Option<String>,
    pub address_country: Option<String>,
    pub address_street: Option<String>,
    pub address_postal_code: Option<String>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let status = OrderStatus::from_code(self.status).ok_or(RepositoryError::Integrity)?;

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

        Ok(Order::from_repository(
            self.id,
            UserId::new(self.user_id),
            Vec::new(),
            status,
            address,
            self.created_at,
            self.latest_update,
        ))
    }
}
