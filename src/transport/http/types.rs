use crate::domain::model::{Product, ProductDraft};
use crate::storage::{InMemoryRepository, Repository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn Repository<Product>>,
}

impl AppState {
    pub fn new(products: Arc<dyn Repository<Product>>) -> Self {
        Self { products }
    }

    /// State backed by a fresh, empty in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::<Product>::new()))
    }
}

/// Request body for create and update. Any `id` in the body is ignored.
///
/// Missing fields are accepted here and rejected by validation, so a body
/// without `name` reports "Name is required" rather than a parse error.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct ProductPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl ProductPayload {
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
