use super::{Entity, EntityId, SqlValue};
use sqlx::FromRow;

/// A second entity type, to exercise the repositories outside of products.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: EntityId,
    pub title: String,
    pub position: i32,
    pub archived: bool,
}

impl Category {
    pub fn new(title: &str, position: i32) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            position,
            archived: false,
        }
    }
}

impl Entity for Category {
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static [&'static str] = &["title", "position", "archived"];

    fn create_table_sql() -> &'static str {
        "CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            position INTEGER NOT NULL,
            archived BOOLEAN NOT NULL
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
            SqlValue::Text(self.title.clone()),
            SqlValue::Int(self.position),
            SqlValue::Bool(self.archived),
        ]
    }
}
