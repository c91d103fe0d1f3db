use sqlx::FromRow;

use business::domain::product::model::Product;

/// Row shape of the `products` table.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(self.id, self.name, self.description, self.price)
    }
}
