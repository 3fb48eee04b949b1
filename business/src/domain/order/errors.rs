use crate::domain::address::errors::AddressError;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.not_found")]
    NotFound,
    #[error("order.invalid_status_transition")]
    InvalidStatusTransition,
    #[error("order.invalid_quantity")]
    InvalidQuantity,
    #[error("order.missing_address")]
    MissingAddress,
    #[error("order.empty_order")]
    EmptyOrder,
    /// More than one open cart exists for a user. Detected, never repaired.
    #[error("order.duplicate_cart")]
    DuplicateCart,
    #[error("order.unknown_product")]
    UnknownProduct,
    #[error("order.invalid_address")]
    Address(#[from] AddressError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
