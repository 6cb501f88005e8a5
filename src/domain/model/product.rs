use super::{Entity, EntityId, SqlValue};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A product as stored in the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    /// Assigned by the store on creation, never changed afterwards.
    #[schema(value_type = i32)]
    pub id: EntityId,
    pub name: String,
    pub price: f64,
}

impl Entity for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &["name", "price"];

    fn create_table_sql() -> &'static str {
        "CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL
        )"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn column_values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.name.clone()),
            SqlValue::Double(self.price),
        ]
    }
}

/// The mutable part of a product: what clients send on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
}

impl ProductDraft {
    /// Checks the name first, then the price, and reports only the first failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        // Also rejects NaN.
        if !(self.price > 0.0) {
            return Err("Price must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Builds an unsaved product. The store replaces the placeholder id.
    pub fn into_product(self) -> Product {
        Product {
            id: 0,
            name: self.name,
            price: self.price,
        }
    }

    /// Copies name and price onto an existing product, leaving its id alone.
    pub fn apply_to(self, product: &mut Product) {
        product.name = self.name;
        product.price = self.price;
    }
}
