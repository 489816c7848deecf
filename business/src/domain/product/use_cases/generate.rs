use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GenerateProductsParams {
    pub count: usize,
    /// Testing hook: pins the random sequence when set.
    pub seed: Option<u64>,
}

#[async_trait]
pub trait GenerateProductsUseCase: Send + Sync {
    async fn execute(&self, params: GenerateProductsParams) -> Result<Vec<Product>, ProductError>;
}
