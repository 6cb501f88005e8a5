//! In-process repository, used by the router tests and by `STORAGE_BACKEND=memory`.

use crate::domain::model::{Entity, EntityId};
use crate::storage::repository::{Repository, StoreResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

struct Table<T> {
    rows: BTreeMap<EntityId, T>,
    last_id: EntityId,
}

/// Keeps entities in a map keyed by id, handing out ids the way a `SERIAL`
/// column does: increasing from 1, never reused.
pub struct InMemoryRepository<T> {
    table: RwLock<Table<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> StoreResult<Vec<T>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: EntityId) -> StoreResult<Option<T>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn add(&self, mut entity: T) -> StoreResult<T> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        entity.set_id(table.last_id);
        table.rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: &T) -> StoreResult<()> {
        let mut table = self.table.write().await;
        if let Some(row) = table.rows.get_mut(&entity.id()) {
            *row = entity.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> StoreResult<()> {
        let mut table = self.table.write().await;
        table.rows.remove(&id);
        Ok(())
    }
}
