use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::count::CountProductsUseCase;

pub struct CountProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CountProductsUseCase for CountProductsUseCaseImpl {
    async fn execute(&self) -> Result<u64, ProductError> {
        let total = self.repository.count().await?;
        self.logger.debug(&format!("Product count: {}", total));
        Ok(total)
    }
}
