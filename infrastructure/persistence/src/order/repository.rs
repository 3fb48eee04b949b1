use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use business::domain::address::model::Address;
use business::domain::invoice::model::Invoice;
use business::domain::item::model::Item;
use business::domain::order::errors::OrderError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::UserId;

use super::queries;
use crate::address::queries as address_queries;
use crate::db::run_in_transaction;
use crate::invoice::queries as invoice_queries;
use crate::item::queries as item_queries;
use crate::product::queries as product_queries;

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Returns the user's open cart on the current transaction, creating an
/// empty one when none exists. Two open carts mean the data is corrupt;
/// that is reported, never repaired here.
async fn cart_for_user(conn: &mut PgConnection, user_id: &UserId) -> Result<Order, OrderError> {
    let mut carts = queries::by_user_and_status(&mut *conn, user_id, OrderStatus::InCart).await?;

    if carts.len() > 1 {
        return Err(OrderError::DuplicateCart);
    }

    match carts.pop() {
        Some(cart) => Ok(cart),
        None => {
            let cart = Order::new_cart(user_id.clone());
            queries::insert(&mut *conn, &cart).await?;
            Ok(cart)
        }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Order, OrderError> {
        queries::by_id(&self.pool, id)
            .await?
            .ok_or(OrderError::NotFound)
    }

    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError> {
        Ok(queries::by_user(&self.pool, user_id).await?)
    }

    async fn get_by_user_and_status(
        &self,
        user_id: &UserId,
        status: OrderStatus,
    ) -> Result<Vec<Order>, OrderError> {
        Ok(queries::by_user_and_status(&self.pool, user_id, status).await?)
    }

    async fn get_or_create_cart(&self, user_id: &UserId) -> Result<Order, OrderError> {
        let user_id = user_id.clone();
        run_in_transaction(&self.pool, move |conn| {
            Box::pin(async move { cart_for_user(conn, &user_id).await })
        })
        .await
    }

    async fn items_by_order(&self, order_id: Uuid) -> Result<Vec<Item>, OrderError> {
        Ok(item_queries::by_order(&self.pool, order_id).await?)
    }

    async fn create(&self, order: Order) -> Result<Order, OrderError> {
        run_in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let mut order = order;
                if let Some(address) = order.address.take() {
                    order.address = Some(address_queries::resolve(&mut *conn, &address).await?);
                }

                queries::insert(&mut *conn, &order).await?;
                Ok(order)
            })
        })
        .await
    }

    async fn add_item(
        &self,
        user_id: &UserId,
        product_id: Uuid,
        quantity: i64,
    ) -> Result<Item, OrderError> {
        let user_id = user_id.clone();
        run_in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let cart = cart_for_user(&mut *conn, &user_id).await?;

                let existing =
                    item_queries::by_order_and_product(&mut *conn, cart.id, product_id).await?;

                // The catalog row may have been edited since the item was
                // first added; touching the item re-snapshots its price.
                let product = product_queries::by_id(&mut *conn, product_id)
                    .await?
                    .ok_or(OrderError::UnknownProduct)?;

                let item = match existing {
                    Some(mut item) => {
                        item.quantity += quantity;
                        item.unit_price = product.price;
                        item_queries::update(&mut *conn, &item).await?;
                        item
                    }
                    None => {
                        let item = Item::new(product_id, cart.id, quantity, product.price)?;
                        item_queries::insert(&mut *conn, &item).await?;
                        item
                    }
                };

                Ok(item)
            })
        })
        .await
    }

    async fn remove_item(&self, user_id: &UserId, item_id: Uuid) -> Result<(), OrderError> {
        let user_id = user_id.clone();
        run_in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let cart = cart_for_user(&mut *conn, &user_id).await?;
                let items = item_queries::by_order(&mut *conn, cart.id).await?;

                // Deleting by bare id would let a caller remove items from
                // someone else's order; only ids present in this cart count.
                if items.iter().any(|item| item.id == item_id) {
                    item_queries::delete(&mut *conn, item_id).await?;
                }

                Ok(())
            })
        })
        .await
    }

    async fn advance(
        &self,
        id: Uuid,
        status: OrderStatus,
        address: Option<Address>,
    ) -> Result<Order, OrderError> {
        run_in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let existing = queries::by_id(&mut *conn, id)
                    .await?
                    .ok_or(OrderError::NotFound)?;

                existing.status.validate_transition(status)?;

                let leaving_cart =
                    existing.status == OrderStatus::InCart && status != OrderStatus::InCart;

                // Checkout prerequisites are verified before any row changes.
                let mut checkout_total = None;
                if leaving_cart {
                    if status != OrderStatus::Canceled
                        && address.is_none()
                        && existing.address.is_none()
                    {
                        return Err(OrderError::MissingAddress);
                    }

                    let mut departing = existing.clone();
                    departing.items = item_queries::by_order(&mut *conn, id).await?;
                    checkout_total = Some(departing.total_price()?);
                }

                let address_id = match &address {
                    Some(supplied) => {
                        Some(address_queries::resolve(&mut *conn, supplied).await?.id)
                    }
                    None => existing.address.as_ref().map(|current| current.id),
                };

                // The departing order is updated before the replacement cart is
                // inserted, keeping the one-open-cart index satisfied at every
                // statement boundary.
                queries::update_status_and_address(&mut *conn, id, status, address_id).await?;

                if let Some(total) = checkout_total {
                    let replacement = Order::new_cart(existing.user_id.clone());
                    queries::insert(&mut *conn, &replacement).await?;

                    // At most one invoice per order, no matter how often the
                    // order is transitioned afterwards.
                    if invoice_queries::by_order(&mut *conn, id).await?.is_none() {
                        let snapshot = queries::by_id(&mut *conn, id)
                            .await?
                            .ok_or(OrderError::NotFound)?;
                        let invoice =
                            Invoice::new(existing.user_id.clone(), snapshot, total);
                        invoice_queries::insert(&mut *conn, &invoice).await?;
                    }
                }

                let mut refreshed = queries::by_id(&mut *conn, id)
                    .await?
                    .ok_or(OrderError::NotFound)?;
                refreshed.items = item_queries::by_order(&mut *conn, id).await?;
                Ok(refreshed)
            })
        })
        .await
    }
}
