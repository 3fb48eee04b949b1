use sqlx::FromRow;
use uuid::Uuid;

use business::domain::address::model::Address;

#[derive(Debug, FromRow)]
pub struct AddressEntity {
    pub id: Uuid,
    pub city: String,
    pub country: String,
    pub street: String,
    pub postal_code: String,
}

impl AddressEntity {
    pub fn into_domain(self) -> Address {
        Address::from_repository(self.id, self.city, self.country, self.street, self.postal_code)
    }
}
