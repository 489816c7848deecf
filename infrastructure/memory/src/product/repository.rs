use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductRequest};
use business::domain::product::repository::ProductRepository;

/// Process-local backend: one reader/writer lock around a growable vector.
/// Reads take the shared guard and return cloned data; writes take the
/// exclusive guard. The guard is never held across an await point. Linear
/// scans throughout; no secondary index.
///
/// Unlike the Postgres backend, `list` and `get_all` return insertion order,
/// and `delete` swap-removes, reordering the tail.
pub struct ProductRepositoryMemory {
    products: RwLock<Vec<Product>>,
}

impl ProductRepositoryMemory {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
        }
    }
}

impl Default for ProductRepositoryMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryMemory {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::DatabaseError)?;
        products.push(product.clone());
        Ok(())
    }

    /// Plain append of the whole batch. No validation happens at this layer,
    /// so the batch cannot partially fail.
    async fn create_bulk(&self, batch: &[Product]) -> Result<(), RepositoryError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::DatabaseError)?;
        products.extend_from_slice(batch);
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::DatabaseError)?;
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<Product>, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::DatabaseError)?;

        let start = page.saturating_sub(1) as usize * page_size as usize;
        if start >= products.len() {
            return Ok(Vec::new());
        }
        let end = (start + page_size as usize).min(products.len());

        Ok(products[start..end].to_vec())
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::DatabaseError)?;
        Ok(products.clone())
    }

    async fn update(&self, id: Uuid, request: &ProductRequest) -> Result<(), RepositoryError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::DatabaseError)?;

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        product.name = request.name.clone();
        product.description = request.description.clone();
        product.price = request.price;
        product.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::DatabaseError)?;

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        // O(1) removal; relative order of the tail is not preserved.
        products.swap_remove(index);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::DatabaseError)?;
        products.clear();
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::DatabaseError)?;
        Ok(products.len() as u64)
    }
}
