use super::errors::ProductError;

/// A product as persisted in the catalog. The identifier is assigned by the
/// store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// The identifier-less form of a product, used for create and update
/// payloads. Validated at construction.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl ProductDraft {
    pub fn new(
        name: String,
        description: Option<String>,
        price: f64,
    ) -> Result<Self, ProductError> {
        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        Ok(Self {
            name,
            description,
            price,
        })
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        description: Option<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
        }
    }

    /// Overwrites name, description and price from the draft, keeping the
    /// identifier untouched.
    pub fn apply(&self, draft: ProductDraft) -> Product {
        Product {
            id: self.id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
        }
    }
}
