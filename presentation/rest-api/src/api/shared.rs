use poem_openapi::Object;

use business::domain::address::model::{Address, NewAddressProps};
use business::domain::shared::money::{Currency, Money};

/// Monetary amount in minor units plus a three-letter currency code.
#[derive(Debug, Clone, Object)]
pub struct MoneyDto {
    /// Amount in minor units (stotinki, cents)
    pub units: i64,
    /// Three-letter currency code, e.g. "BGN"
    pub currency: String,
}

impl From<Money> for MoneyDto {
    fn from(money: Money) -> Self {
        Self {
            units: money.amount,
            currency: money.currency.to_string(),
        }
    }
}

impl MoneyDto {
    /// `None` when the currency code is unknown.
    pub fn to_money(&self) -> Option<Money> {
        let currency = self.currency.parse::<Currency>().ok()?;
        Some(Money::new(self.units, currency))
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddressDto {
    pub city: String,
    pub country: String,
    pub street: String,
    pub postal_code: String,
}

impl AddressDto {
    pub fn into_props(self) -> NewAddressProps {
        NewAddressProps {
            city: self.city,
            country: self.country,
            street: self.street,
            postal_code: self.postal_code,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddressResponse {
    /// Address unique identifier
    pub id: String,
    pub city: String,
    pub country: String,
    pub street: String,
    pub postal_code: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id.to_string(),
            city: address.city,
            country: address.country,
            street: address.street,
            postal_code: address.postal_code,
        }
    }
}
