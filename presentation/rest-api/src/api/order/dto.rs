use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::item::model::Item;
use business::domain::order::model::Order;

use crate::api::shared::{AddressDto, AddressResponse, MoneyDto};

#[derive(Debug, Clone, Object)]
pub struct CreateOrderRequest {
    /// Initial order status; defaults to "in_cart"
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<String>,
    /// Optional shipping address
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<AddressDto>,
}

#[derive(Debug, Clone, Object)]
pub struct AdvanceOrderRequest {
    /// Target order status
    pub status: String,
    /// Shipping address; required when the order first leaves the cart for
    /// any status other than "canceled"
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<AddressDto>,
}

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Product to add
    pub product_id: String,
    /// Quantity to add; merged by summing when the product is already in
    /// the cart
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    /// Item unique identifier
    pub id: String,
    /// Referenced product
    pub product_id: String,
    /// Owning order
    pub order_id: String,
    pub quantity: i64,
    /// Unit price snapshotted when the item was last touched
    pub price: MoneyDto,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            product_id: item.product_id.to_string(),
            order_id: item.order_id.to_string(),
            quantity: item.quantity,
            price: item.unit_price.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    /// Order unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Line items, when loaded by the endpoint
    pub items: Vec<ItemResponse>,
    /// Lifecycle status
    pub status: String,
    /// Shipping address
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<AddressResponse>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub latest_update: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            user_id: order.user_id.to_string(),
            items: order.items.into_iter().map(|item| item.into()).collect(),
            status: order.status.to_string(),
            address: order.address.map(|address| address.into()),
            created_at: order.created_at,
            latest_update: order.latest_update,
        }
    }
}
