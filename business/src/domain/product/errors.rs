#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_length")]
    NameLength,
    #[error("product.price_invalid")]
    PriceInvalid,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
