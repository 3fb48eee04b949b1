use sqlx::{PgConnection, PgExecutor};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::rating::{Rating, RatingAggregate};
use business::domain::shared::value_objects::UserId;

use super::entity::{ProductEntity, RatingEntity};
use crate::db::db_error;

const SELECT_COLUMNS: &str = "id, user_id, name, description, price_units, price_currency, \
     quantity, available, rating, ratings_count, created_at";

pub async fn by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<Product>, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let entity =
        sqlx::query_as::<_, ProductEntity>(&format!("SELECT {SELECT_COLUMNS} FROM products WHERE id = $1"))
            .bind(id)
            .fetch_optional(executor)
            .await
            .map_err(db_error)?;

    entity.map(|e| e.into_domain()).transpose()
}

/// Locks the product row for the rest of the transaction, so concurrent
/// rating writes serialize on it instead of clobbering the aggregate.
pub async fn by_id_for_update(
    conn: &mut PgConnection,
    id: Uuid,
) -> Result<Option<Product>, RepositoryError> {
    let entity = sqlx::query_as::<_, ProductEntity>(&format!(
        "SELECT {SELECT_COLUMNS} FROM products WHERE id = $1 FOR UPDATE"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(db_error)?;

    entity.map(|e| e.into_domain()).transpose()
}

pub async fn insert<'e, E>(executor: E, product: &Product) -> Result<(), RepositoryError>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO products (id, user_id, name, description, price_units, price_currency,
             quantity, available, rating, ratings_count, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
    )
    .bind(product.id)
    .bind(product.user_id.as_str())
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price.amount)
    .bind(product.price.currency.to_string())
    .bind(product.quantity)
    .bind(product.available)
    .bind(product.rating)
    .bind(product.ratings_count)
    .bind(product.created_at)
    .execute(executor)
    .await
    .map_err(db_error)?;

    Ok(())
}

pub async fn rating_by_user_and_product<'e, E>(
    executor: E,
    user_id: &UserId,
    product_id: Uuid,
) -> Result<Option<Rating>, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let entity = sqlx::query_as::<_, RatingEntity>(
        "SELECT user_id, product_id, rating FROM ratings WHERE user_id = $1 AND product_id = $2",
    )
    .bind(user_id.as_str())
    .bind(product_id)
    .fetch_optional(executor)
    .await
    .map_err(db_error)?;

    Ok(entity.map(|e| e.into_domain()))
}

pub async fn insert_rating<'e, E>(executor: E, rating: &Rating) -> Result<(), RepositoryError>
where
    E: PgExecutor<'e>,
{
    sqlx::query("INSERT INTO ratings (user_id, product_id, rating) VALUES ($1, $2, $3)")
        .bind(rating.user_id.as_str())
        .bind(rating.product_id)
        .bind(rating.value)
        .execute(executor)
        .await
        .map_err(db_error)?;

    Ok(())
}

pub async fn update_rating<'e, E>(executor: E, rating: &Rating) -> Result<(), RepositoryError>
where
    E: PgExecutor<'e>,
{
    sqlx::query("UPDATE ratings SET rating = $1 WHERE user_id = $2 AND product_id = $3")
        .bind(rating.value)
        .bind(rating.user_id.as_str())
        .bind(rating.product_id)
        .execute(executor)
        .await
        .map_err(db_error)?;

    Ok(())
}

pub async fn update_rating_aggregate<'e, E>(
    executor: E,
    product_id: Uuid,
    aggregate: RatingAggregate,
) -> Result<(), RepositoryError>
where
    E: PgExecutor<'e>,
{
    sqlx::query("UPDATE products SET rating = $1, ratings_count = $2 WHERE id = $3")
        .bind(aggregate.average)
        .bind(aggregate.count)
        .bind(product_id)
        .execute(executor)
        .await
        .map_err(db_error)?;

    Ok(())
}
