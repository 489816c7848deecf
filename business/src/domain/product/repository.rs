use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductRequest};

/// Storage contract shared by the Postgres and in-memory backends.
/// The backend is selected at construction time; callers only ever see
/// this trait.
///
/// `list` takes a 1-based page and a positive page size and does not clamp
/// either: a page past the end of the dataset yields an empty batch, not an
/// error. The Postgres backend orders by `created_at` descending; the
/// in-memory backend preserves insertion order.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError>;
    /// All-or-nothing: either every product in the batch is stored or none.
    async fn create_bulk(&self, products: &[Product]) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<Product>, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    /// Overwrites name, description and price, refreshing `updated_at`.
    /// Fails with `NotFound` when no product matches the id.
    async fn update(&self, id: Uuid, request: &ProductRequest) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn delete_all(&self) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
}
