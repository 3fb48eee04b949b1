use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::order::model::Order;
use crate::domain::shared::money::Money;
use crate::domain::shared::value_objects::UserId;

/// An immutable billing record snapshotted from an order at the moment it
/// first left the cart. Invoices are append-only: there is no update or
/// delete operation anywhere in the system.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub id: Uuid,
    pub user_id: UserId,
    pub order: Order,
    pub total_price: Money,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(user_id: UserId, order: Order, total_price: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            order,
            total_price,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        order: Order,
        total_price: Money,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            order,
            total_price,
            created_at,
        }
    }
}
