use sqlx::PgExecutor;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::UserId;

use super::entity::OrderEntity;
use crate::db::db_error;

const SELECT_COLUMNS: &str = "o.id, o.user_id, o.status, o.created_at, o.latest_update, \
     a.id AS address_id, a.city AS address_city, a.country AS address_country, \
     a.street AS address_street, a.postal_code AS address_postal_code";

pub async fn by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<Order>, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let entity = sqlx::query_as::<_, OrderEntity>(&format!(
        "SELECT {SELECT_COLUMNS} FROM orders o
         LEFT JOIN addresses a ON a.id = o.address_id
         WHERE o.id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
    .map_err(db_error)?;

    entity.map(|e| e.into_domain()).transpose()
}

pub async fn by_user<'e, E>(executor: E, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let entities = sqlx::query_as::<_, OrderEntity>(&format!(
        "SELECT {SELECT_COLUMNS} FROM orders o
         LEFT JOIN addresses a ON a.id = o.address_id
         WHERE o.user_id = $1
         ORDER BY o.created_at DESC"
    ))
    .bind(user_id.as_str())
    .fetch_all(executor)
    .await
    .map_err(db_error)?;

    entities.into_iter().map(|e| e.into_domain()).collect()
}

pub async fn by_user_and_status<'e, E>(
    executor: E,
    user_id: &UserId,
    status: OrderStatus,
) -> Result<Vec<Order>, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let entities = sqlx::query_as::<_, OrderEntity>(&format!(
        "SELECT {SELECT_COLUMNS} FROM orders o
         LEFT JOIN addresses a ON a.id = o.address_id
         WHERE o.user_id = $1 AND o.status = $2
         ORDER BY o.created_at DESC"
    ))
    .bind(user_id.as_str())
    .bind(status.code())
    .fetch_all(executor)
    .await
    .map_err(db_error)?;

    entities.into_iter().map(|e| e.into_domain()).collect()
}

/// Inserts an order row. The order's address, when present, must already be
/// resolved to a persisted row.
pub async fn insert<'e, E>(executor: E, order: &Order) -> Result<(), RepositoryError>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO orders (id, user_id, status, address_id, created_at, latest_update)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(order.id)
    .bind(order.user_id.as_str())
    .bind(order.status.code())
    .bind(order.address.as_ref().map(|address| address.id))
    .bind(order.created_at)
    .bind(order.latest_update)
    .execute(executor)
    .await
    .map_err(db_error)?;

    Ok(())
}

pub async fn update_status_and_address<'e, E>(
    executor: E,
    id: Uuid,
    status: OrderStatus,
    address_id: Option<Uuid>,
) -> Result<(), RepositoryError>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        "UPDATE orders SET status = $1, address_id = $2, latest_update = now() WHERE id = $3",
    )
    .bind(status.code())
    .bind(address_id)
    .bind(id)
    .execute(executor)
    .await
    .map_err(db_error)?;

    Ok(())
}
