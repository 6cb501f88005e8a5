//! Generic data-access contract shared by every storage backend.

use crate::domain::model::{Entity, EntityId};
use async_trait::async_trait;

/// Failure reported by the backing store (connectivity, constraint violation, ...).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD operations over a single entity type.
///
/// "Not found" is never an error: `get_by_id` answers `None`, and
/// `update`/`delete` on a missing id change nothing.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Returns every persisted entity (empty if there are none).
    async fn get_all(&self) -> StoreResult<Vec<T>>;

    async fn get_by_id(&self, id: EntityId) -> StoreResult<Option<T>>;

    /// Persists a new entity and returns it with the store-assigned id.
    /// Whatever id the caller put on `entity` is ignored.
    async fn add(&self, entity: T) -> StoreResult<T>;

    /// Writes the current state of `entity` to the row with the same id.
    async fn update(&self, entity: &T) -> StoreResult<()>;

    async fn delete(&self, id: EntityId) -> StoreResult<()>;
}
