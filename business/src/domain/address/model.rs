use uuid::Uuid;

use super::errors::AddressError;

const MAX_FIELD_LENGTH: usize = 255;
const MAX_POSTAL_CODE_LENGTH: usize = 10;

/// A shipping address. Addresses are value objects: two rows with the same
/// city/country/street/postal code are the same address, and persistence
/// deduplicates them on that tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: Uuid,
    pub city: String,
    pub country: String,
    pub street: String,
    pub postal_code: String,
}

pub struct NewAddressProps {
    pub city: String,
    pub country: String,
    pub street: String,
    pub postal_code: String,
}

impl Address {
    pub fn new(props: NewAddressProps) -> Result<Self, AddressError> {
        let city = checked_field(props.city, MAX_FIELD_LENGTH).ok_or(AddressError::CityInvalid)?;
        let country =
            checked_field(props.country, MAX_FIELD_LENGTH).ok_or(AddressError::CountryInvalid)?;
        let street =
            checked_field(props.street, MAX_FIELD_LENGTH).ok_or(AddressError::StreetInvalid)?;
        let postal_code = checked_field(props.postal_code, MAX_POSTAL_CODE_LENGTH)
            .ok_or(AddressError::PostalCodeInvalid)?;

        Ok(Self {
            id: Uuid::new_v4(),
            city,
            country,
            street,
            postal_code,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        city: String,
        country: String,
        street: String,
        postal_code: String,
    ) -> Self {
        Self {
            id,
            city,
            country,
            street,
            postal_code,
        }
    }
}

fn checked_field(value: String, max_length: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.len() > max_length {
        return None;
    }
    Some(trimmed.to_string())
}
