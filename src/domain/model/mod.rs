//! Domain model definitions for persisted entities.

use sqlx::postgres::PgRow;
use sqlx::FromRow;

pub mod product;

#[cfg(test)]
pub(crate) mod fixtures;

pub use product::{Product, ProductDraft};

/// Identifier assigned by the store on creation (`SERIAL` column).
pub type EntityId = i32;

/// A single column value handed to the SQL layer for binding.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Int(i32),
    Double(f64),
    Bool(bool),
}

/// Trait that defines the contract for any entity a repository can persist.
///
/// This trait allows the repositories to work with any entity without knowing
/// its specific schema. Each entity provides:
/// - Table name and primary key information
/// - The non-key columns, in the order `column_values` yields them
/// - SQL schema definition
/// - Row mapping (through `FromRow`)
pub trait Entity: for<'r> FromRow<'r, PgRow> + Clone + Send + Sync + Unpin + 'static {
    /// Name of the database table for this entity.
    const TABLE: &'static str;

    /// Name of the store-generated primary key column.
    const ID_COLUMN: &'static str = "id";

    /// Every column except the primary key.
    const COLUMNS: &'static [&'static str];

    /// Returns the SQL CREATE TABLE statement for this entity.
    fn create_table_sql() -> &'static str;

    fn id(&self) -> EntityId;

    /// Overwrites the identifier. Only stores call this, right after assigning one.
    fn set_id(&mut self, id: EntityId);

    /// Values for `COLUMNS`, same order.
    fn column_values(&self) -> Vec<SqlValue>;
}
