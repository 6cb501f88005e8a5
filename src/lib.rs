pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::database_service::DatabaseService;
pub use domain::model::{Entity, EntityId, Product, ProductDraft, SqlValue};
pub use infra::config::{AppConfig, ConfigError, StorageBackend};
pub use storage::{InMemoryRepository, PgRepository, Repository, StoreError};
