use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let draft = ProductDraft::new(params.name, params.description, params.price)?;

        let product = self.repository.insert(&draft).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
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

    #[tokio::test]
    async fn should_create_product_and_return_assigned_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().returning(|draft| {
            Ok(Product::from_repository(
                42,
                draft.name.clone(),
                draft.description.clone(),
                draft.price,
            ))
        });

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "Mechanical Keyboard".to_string(),
                description: Some("Tenkeyless, brown switches".to_string()),
                price: 89.99,
            })
            .await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, 42);
        assert_eq!(product.name, "Mechanical Keyboard");
        assert_eq!(
            product.description,
            Some("Tenkeyless, brown switches".to_string())
        );
        assert_eq!(product.price, 89.99);
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let mock_repo = MockProductRepo::new();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "".to_string(),
                description: None,
                price: 5.0,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "Monitor".to_string(),
                description: None,
                price: 199.0,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
