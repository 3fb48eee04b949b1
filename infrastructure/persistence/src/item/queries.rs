use sqlx::PgExecutor;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;

use super::entity::ItemEntity;
use crate::db::db_error;

/// Line-item statements. Item rows are only ever mutated from inside an
/// order transaction; the caller supplies the snapshotted unit price, and
/// nothing here reads the product catalog.
pub async fn by_order<'e, E>(executor: E, order_id: Uuid) -> Result<Vec<Item>, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let entities = sqlx::query_as::<_, ItemEntity>(
        "SELECT id, product_id, order_id, quantity, price_units, price_currency
         FROM items WHERE order_id = $1",
    )
    .bind(order_id)
    .fetch_all(executor)
    .await
    .map_err(db_error)?;

    entities.into_iter().map(|e| e.into_domain()).collect()
}

pub async fn by_order_and_product<'e, E>(
    executor: E,
    order_id: Uuid,
    product_id: Uuid,
) -> Result<Option<Item>, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let entity = sqlx::query_as::<_, ItemEntity>(
        "SELECT id, product_id, order_id, quantity, price_units, price_currency
         FROM items WHERE order_id = $1 AND product_id = $2",
    )
    .bind(order_id)
    .bind(product_id)
    .fetch_optional(executor)
    .await
    .map_err(db_error)?;

    entity.map(|e| e.into_domain()).transpose()
}

pub async fn insert<'e, E>(executor: E, item: &Item) -> Result<(), RepositoryError>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO items (id, product_id, order_id, quantity, price_units, price_currency)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(item.id)
    .bind(item.product_id)
    .bind(item.order_id)
    .bind(item.quantity)
    .bind(item.unit_price.amount)
    .bind(item.unit_price.currency.to_string())
    .execute(executor)
    .await
    .map_err(db_error)?;

    Ok(())
}

/// Overwrites quantity and price snapshot for an existing item row.
pub async fn update<'e, E>(executor: E, item: &Item) -> Result<(), RepositoryError>
where
    E: PgExecutor<'e>,
{
    sqlx::query("UPDATE items SET quantity = $1, price_units = $2, price_currency = $3 WHERE id = $4")
        .bind(item.quantity)
        .bind(item.unit_price.amount)
        .bind(item.unit_price.currency.to_string())
        .bind(item.id)
        .execute(executor)
        .await
        .map_err(db_error)?;

    Ok(())
}

pub async fn delete<'e, E>(executor: E, id: Uuid) -> Result<(), RepositoryError>
where
    E: PgExecutor<'e>,
{
    sqlx::query("DELETE FROM items WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await
        .map_err(db_error)?;

    Ok(())
}
