use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let draft = ProductDraft::new(params.name, params.description, params.price)?;

        // Verify product exists
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let updated_product = existing.apply(draft);

        self.repository.update(&updated_product).await?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
            async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
            async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
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

    fn params(id: i64) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: "Updated Keyboard".to_string(),
            description: Some("Full size".to_string()),
            price: 59.0,
        }
    }

    #[tokio::test]
    async fn should_replace_fields_and_keep_id_when_product_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            Ok(Product::from_repository(
                id,
                "Old Name".to_string(),
                Some("old".to_string()),
                10.0,
            ))
        });
        mock_repo.expect_update().returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(7)).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Updated Keyboard");
        assert_eq!(product.description, Some("Full size".to_string()));
        assert_eq!(product.price, 59.0);
    }

    #[tokio::test]
    async fn should_be_idempotent_when_reapplying_same_details() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            Ok(Product::from_repository(
                id,
                "Updated Keyboard".to_string(),
                Some("Full size".to_string()),
                59.0,
            ))
        });
        mock_repo.expect_update().returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let first = use_case.execute(params(7)).await.unwrap();
        let second = use_case.execute(params(7)).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(999)).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_update_when_name_is_empty() {
        let mock_repo = MockProductRepo::new();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 1,
                name: "".to_string(),
                description: None,
                price: 1.0,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }
}
