use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::generator::ProductGenerator;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::generate::{GenerateProductsParams, GenerateProductsUseCase};

/// Bulk generation: synthesizes `count` random products and persists them
/// through `create_bulk` in a single call.
pub struct GenerateProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateProductsUseCase for GenerateProductsUseCaseImpl {
    async fn execute(&self, params: GenerateProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Generating {} random products", params.count));

        let mut generator = match params.seed {
            Some(seed) => ProductGenerator::with_seed(seed),
            None => ProductGenerator::from_entropy(),
        };
        let products = generator.generate_many(params.count);

        self.repository.create_bulk(&products).await?;

        self.logger
            .info(&format!("Stored {} generated products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductRequest;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn create(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn create_bulk(&self, products: &[Product]) -> Result<(), RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn list(&self, page: u32, page_size: u32) -> Result<Vec<Product>, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn update(&self, id: Uuid, request: &ProductRequest) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn delete_all(&self) -> Result<(), RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_generate_and_store_requested_count() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create_bulk()
            .withf(|products| products.len() == 10)
            .returning(|_| Ok(()));

        let use_case = GenerateProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateProductsParams {
                count: 10,
                seed: Some(42),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn should_return_same_names_for_same_seed() {
        fn use_case() -> GenerateProductsUseCaseImpl {
            let mut mock_repo = MockProductRepo::new();
            mock_repo.expect_create_bulk().returning(|_| Ok(()));
            GenerateProductsUseCaseImpl {
                repository: Arc::new(mock_repo),
                logger: mock_logger(),
            }
        }

        let first = use_case()
            .execute(GenerateProductsParams {
                count: 5,
                seed: Some(7),
            })
            .await
            .unwrap();
        let second = use_case()
            .execute(GenerateProductsParams {
                count: 5,
                seed: Some(7),
            })
            .await
            .unwrap();

        let names = |products: &[Product]| {
            products.iter().map(|p| p.name.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names(&first), names(&second));
    }

    #[tokio::test]
    async fn should_propagate_bulk_insert_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create_bulk()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GenerateProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateProductsParams {
                count: 3,
                seed: None,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
