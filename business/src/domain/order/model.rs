use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::OrderError;
use super::value_objects::OrderStatus;
use crate::domain::address::model::Address;
use crate::domain::item::model::Item;
use crate::domain::shared::money::Money;
use crate::domain::shared::value_objects::UserId;

/// An order and, while its status is `InCart`, the user's shopping cart.
/// At most one `InCart` order exists per user at any time.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub items: Vec<Item>,
    pub status: OrderStatus,
    pub address: Option<Address>,
    pub created_at: DateTime<Utc>,
    pub latest_update: DateTime<Utc>,
}

impl Order {
    /// Builds a fresh, empty cart for a user.
    pub fn new_cart(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            items: Vec::new(),
            status: OrderStatus::InCart,
            address: None,
            created_at: now,
            latest_update: now,
        }
    }

    /// Builds a new order in the given status, for explicit checkout-intent
    /// creation.
    pub fn new(user_id: UserId, status: OrderStatus, address: Option<Address>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            items: Vec::new(),
            status,
            address,
            created_at: now,
            latest_update: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        items: Vec<Item>,
        status: OrderStatus,
        address: Option<Address>,
        created_at: DateTime<Utc>,
        latest_update: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            items,
            status,
            address,
            created_at,
            latest_update,
        }
    }

    pub fn find_item_for_product(&self, product_id: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Sums `unit_price * quantity` over the order's items. An order with no
    /// items has no meaningful total and cannot leave the cart.
    pub fn total_price(&self) -> Result<Money, OrderError> {
        let first = self.items.first().ok_or(OrderError::EmptyOrder)?;

        let zero = Money::new(0, first.unit_price.currency);
        Ok(self
            .items
            .iter()
            .fold(zero, |total, item| total.add(item.line_total())))
    }
}
