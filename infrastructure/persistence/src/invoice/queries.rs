use sqlx::PgExecutor;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::invoice::model::Invoice;
use business::domain::shared::value_objects::UserId;

use super::entity::InvoiceEntity;
use crate::db::db_error;

const SELECT_COLUMNS: &str = "i.id, i.user_id, i.total_units, i.total_currency, i.created_at, \
     o.id AS order_id, o.user_id AS order_user_id, o.status AS order_status, \
     o.created_at AS order_created_at, o.latest_update AS order_latest_update, \
     a.id AS address_id, a.city AS address_city, a.country AS address_country, \
     a.street AS address_street, a.postal_code AS address_postal_code";

pub async fn by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<Invoice>, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let entity = sqlx::query_as::<_, InvoiceEntity>(&format!(
        "SELECT {SELECT_COLUMNS} FROM invoices i
         JOIN orders o ON o.id = i.order_id
         LEFT JOIN addresses a ON a.id = o.address_id
         WHERE i.id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
    .map_err(db_error)?;

    entity.map(|e| e.into_domain()).transpose()
}

pub async fn by_user<'e, E>(executor: E, user_id: &UserId) -> Result<Vec<Invoice>, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let entities = sqlx::query_as::<_, InvoiceEntity>(&format!(
        "SELECT {SELECT_COLUMNS} FROM invoices i
         JOIN orders o ON o.id = i.order_id
         LEFT JOIN addresses a ON a.id = o.address_id
         WHERE i.user_id = $1
         ORDER BY i.created_at DESC"
    ))
    .bind(user_id.as_str())
    .fetch_all(executor)
    .await
    .map_err(db_error)?;

    entities.into_iter().map(|e| e.into_domain()).collect()
}

pub async fn by_order<'e, E>(
    executor: E,
    order_id: Uuid,
) -> Result<Option<Invoice>, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let entity = sqlx::query_as::<_, InvoiceEntity>(&format!(
        "SELECT {SELECT_COLUMNS} FROM invoices i
         JOIN orders o ON o.id = i.order_id
         LEFT JOIN addresses a ON a.id = o.address_id
         WHERE i.order_id = $1"
    ))
    .bind(order_id)
    .fetch_optional(executor)
    .await
    .map_err(db_error)?;

    entity.map(|e| e.into_domain()).transpose()
}

/// Inserts the one immutable invoice row for an order. There is deliberately
/// no update or delete statement in this module.
pub async fn insert<'e, E>(executor: E, invoice: &Invoice) -> Result<(), RepositoryError>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO invoices (id, user_id, order_id, total_units, total_currency, created_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(invoice.id)
    .bind(invoice.user_id.as_str())
    .bind(invoice.order.id)
    .bind(invoice.total_price.amount)
    .bind(invoice.total_price.currency.to_string())
    .bind(invoice.created_at)
    .execute(executor)
    .await
    .map_err(db_error)?;

    Ok(())
}
