use sqlx::PgConnection;

use business::domain::address::model::Address;
use business::domain::errors::RepositoryError;

use super::entity::AddressEntity;
use crate::db::db_error;

/// Returns the persisted row matching this address by value, inserting one
/// when none exists. Idempotent; must run on the caller's transaction so a
/// concurrent duplicate insert cannot race past the lookup. The upsert
/// targets the unique index on the value tuple, so the race collapses to
/// "last write observed wins".
pub async fn resolve(
    conn: &mut PgConnection,
    address: &Address,
) -> Result<Address, RepositoryError> {
    let existing = sqlx::query_as::<_, AddressEntity>(
        "SELECT id, city, country, street, postal_code FROM addresses
         WHERE city = $1 AND country = $2 AND street = $3 AND postal_code = $4",
    )
    .bind(&address.city)
    .bind(&address.country)
    .bind(&address.street)
    .bind(&address.postal_code)
    .fetch_optional(&mut *conn)
    .await
    .map_err(db_error)?;

    if let Some(entity) = existing {
        return Ok(entity.into_domain());
    }

    let entity = sqlx::query_as::<_, AddressEntity>(
        r#"INSERT INTO addresses (id, city, country, street, postal_code)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (city, country, street, postal_code)
            DO UPDATE SET city = EXCLUDED.city
        RETURNING id, city, country, street, postal_code"#,
    )
    .bind(address.id)
    .bind(&address.city)
    .bind(&address.country)
    .bind(&address.street)
    .bind(&address.postal_code)
    .fetch_one(&mut *conn)
    .await
    .map_err(db_error)?;

    Ok(entity.into_domain())
}
