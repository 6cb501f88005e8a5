//! Owns the PostgreSQL connection pool and hands out repositories over it.

use crate::domain::model::Entity;
use crate::infra::config::AppConfig;
use crate::storage::{PgRepository, StoreResult};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub struct DatabaseService {
    pool: PgPool,
}

impl DatabaseService {
    /// Connects using `DATABASE_URL` and the configured pool size.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let database_url = config.database_url()?;
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(database_url)
            .await?;
        tracing::info!(
            max_connections = config.db_max_connections,
            "connected to database"
        );
        Ok(Self { pool })
    }

    /// Creates the table backing `T` when it is missing. Existing tables are left untouched.
    pub async fn ensure_table<T: Entity>(&self) -> StoreResult<()> {
        self.repository::<T>().ensure_table().await?;
        tracing::info!(table = T::TABLE, "table ready");
        Ok(())
    }

    pub fn repository<T: Entity>(&self) -> PgRepository<T> {
        PgRepository::new(self.pool.clone())
    }

    pub async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
