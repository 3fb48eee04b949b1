#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.invalid_quantity")]
    InvalidQuantity,
    #[error("product.invalid_rating")]
    InvalidRating,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
