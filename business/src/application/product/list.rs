use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase, ProductPage};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError> {
        // The repositories never clamp; pagination defaults live here.
        let page = if params.page < 1 { DEFAULT_PAGE } else { params.page };
        let page_size = if params.page_size < 1 || params.page_size > MAX_PAGE_SIZE {
            DEFAULT_PAGE_SIZE
        } else {
            params.page_size
        };

        self.logger.info(&format!(
            "Listing products, page {} (size {})",
            page, page_size
        ));

        let products = self.repository.list(page, page_size).await?;

        Ok(ProductPage {
            products,
            page,
            page_size,
        })
    }
}
