//! Repository implementation using PostgreSQL.
//!
//! SQL is assembled from the `Entity` metadata, so one implementation serves
//! every entity type. Each call checks a connection out of the pool for the
//! duration of the statement; it goes back to the pool when the call returns,
//! whether it succeeded or not.

use crate::domain::model::{Entity, EntityId, SqlValue};
use crate::storage::repository::{Repository, StoreResult};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::marker::PhantomData;

/// A repository for `T` backed by a PostgreSQL connection pool.
pub struct PgRepository<T> {
    pool: PgPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for PgRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> PgRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Creates the entity's table if it does not exist yet.
    pub async fn ensure_table(&self) -> StoreResult<()> {
        sqlx::query(T::create_table_sql())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn select_list() -> String {
        let mut columns = Vec::with_capacity(T::COLUMNS.len() + 1);
        columns.push(T::ID_COLUMN);
        columns.extend_from_slice(T::COLUMNS);
        columns.join(", ")
    }

    fn select_all_sql() -> String {
        format!(
            "SELECT {} FROM {} ORDER BY {}",
            Self::select_list(),
            T::TABLE,
            T::ID_COLUMN
        )
    }

    fn select_by_id_sql() -> String {
        format!(
            "SELECT {} FROM {} WHERE {} = $1",
            Self::select_list(),
            T::TABLE,
            T::ID_COLUMN
        )
    }

    fn delete_sql() -> String {
        format!("DELETE FROM {} WHERE {} = $1", T::TABLE, T::ID_COLUMN)
    }

    fn insert_query(entity: &T) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(format!(
            "INSERT INTO {} ({}) VALUES (",
            T::TABLE,
            T::COLUMNS.join(", ")
        ));
        for (i, value) in entity.column_values().into_iter().enumerate() {
            if i > 0 {
                qb.push(", ");
            }
            push_value(&mut qb, value);
        }
        qb.push(") RETURNING ");
        qb.push(Self::select_list());
        qb
    }

    fn update_query(entity: &T) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(format!("UPDATE {} SET ", T::TABLE));
        for (i, (column, value)) in T::COLUMNS
            .iter()
            .zip(entity.column_values())
            .enumerate()
        {
            if i > 0 {
                qb.push(", ");
            }
            qb.push(*column);
            qb.push(" = ");
            push_value(&mut qb, value);
        }
        qb.push(format!(" WHERE {} = ", T::ID_COLUMN));
        qb.push_bind(entity.id());
        qb
    }
}

fn push_value(qb: &mut QueryBuilder<'static, Postgres>, value: SqlValue) {
    match value {
        SqlValue::Text(v) => qb.push_bind(v),
        SqlValue::Int(v) => qb.push_bind(v),
        SqlValue::Double(v) => qb.push_bind(v),
        SqlValue::Bool(v) => qb.push_bind(v),
    };
}

#[async_trait]
impl<T: Entity> Repository<T> for PgRepository<T> {
    async fn get_all(&self) -> StoreResult<Vec<T>> {
        let sql = Self::select_all_sql();
        let rows = sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: EntityId) -> StoreResult<Option<T>> {
        let sql = Self::select_by_id_sql();
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn add(&self, entity: T) -> StoreResult<T> {
        let mut qb = Self::insert_query(&entity);
        let created = qb.build_query_as::<T>().fetch_one(&self.pool).await?;
        Ok(created)
    }

    async fn update(&self, entity: &T) -> StoreResult<()> {
        let mut qb = Self::update_query(entity);
        qb.build().execute(&self.pool).await?;
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> StoreResult<()> {
        let sql = Self::delete_sql();
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }
}
