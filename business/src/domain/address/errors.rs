#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("address.city_invalid")]
    CityInvalid,
    #[error("address.country_invalid")]
    CountryInvalid,
    #[error("address.street_invalid")]
    StreetInvalid,
    #[error("address.postal_code_invalid")]
    PostalCodeInvalid,
}
