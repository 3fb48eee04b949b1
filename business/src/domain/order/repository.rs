use async_trait::async_trait;
use uuid::Uuid;

use super::errors::OrderError;
use super::model::Order;
use super::value_objects::OrderStatus;
use crate::domain::address::model::Address;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::UserId;

/// Persistence port for orders and their line items.
///
/// The multi-step operations (`get_or_create_cart`, `create`, `add_item`,
/// `remove_item`, `advance`) are atomic: the adapter runs each of them in a
/// single database transaction, and any failure rolls the whole operation
/// back.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Order, OrderError>;

    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError>;

    async fn get_by_user_and_status(
        &self,
        user_id: &UserId,
        status: OrderStatus,
    ) -> Result<Vec<Order>, OrderError>;

    /// Returns the user's single open cart, creating an empty one when none
    /// exists. Finding more than one open cart is a data-integrity fault
    /// reported as `OrderError::DuplicateCart`.
    async fn get_or_create_cart(&self, user_id: &UserId) -> Result<Order, OrderError>;

    async fn items_by_order(&self, order_id: Uuid) -> Result<Vec<Item>, OrderError>;

    /// Inserts a new order, resolving its address (when supplied) in the same
    /// transaction.
    async fn create(&self, order: Order) -> Result<Order, OrderError>;

    /// Adds `quantity` of a product to the user's cart. When the cart already
    /// holds an item for the product, quantities are summed and the unit
    /// price is re-snapshotted from the current product price.
    async fn add_item(
        &self,
        user_id: &UserId,
        product_id: Uuid,
        quantity: i64,
    ) -> Result<Item, OrderError>;

    /// Deletes an item from the user's cart. An id not present in the cart is
    /// a no-op; items of other orders and other users are never touched.
    async fn remove_item(&self, user_id: &UserId, item_id: Uuid) -> Result<(), OrderError>;

    /// Applies a status transition to an existing order, enforcing the state
    /// machine. On the order's first departure from `InCart` this also
    /// creates the replacement cart, computes the order total and issues the
    /// invoice. A `None` address keeps the order's current one.
    async fn advance(
        &self,
        id: Uuid,
        status: OrderStatus,
        address: Option<Address>,
    ) -> Result<Order, OrderError>;
}
