use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Store-assigned product identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_domain_product_into_response() {
        let product = Product::from_repository(
            11,
            "Desk Lamp".to_string(),
            Some("Warm white".to_string()),
            24.0,
        );

        let response = ProductResponse::from(product);

        assert_eq!(response.id, 11);
        assert_eq!(response.name, "Desk Lamp");
        assert_eq!(response.description, Some("Warm white".to_string()));
        assert_eq!(response.price, 24.0);
    }
}
