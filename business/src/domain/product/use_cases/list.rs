use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct ListProductsParams {
    pub page: u32,
    pub page_size: u32,
}

/// One page of products, echoing the pagination that produced it.
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: u32,
    pub page_size: u32,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError>;
}
