use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductDraft};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    /// Inserts a new record and returns the persisted form with the
    /// store-assigned identifier.
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
