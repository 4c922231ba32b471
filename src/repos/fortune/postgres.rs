/*
 * Responsibility
 * - fortune table access via SQLx
 * - random pick is pushed down to Postgres (ORDER BY random() LIMIT 1)
 */
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::repos::fortune::store::{FortuneRow, FortuneStore, StoreError, StoreResult};

#[derive(Clone, Debug)]
pub struct PgFortuneStore {
    pool: PgPool,
}

impl PgFortuneStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl FortuneStore for PgFortuneStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn list_all(&self) -> StoreResult<Vec<FortuneRow>> {
        let rows = sqlx::query_as::<_, FortuneRow>(
            r#"
            SELECT id, text
            FROM fortune
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn random_fortune(&self) -> StoreResult<FortuneRow> {
        let row = sqlx::query_as::<_, FortuneRow>(
            r#"
            SELECT id, text
            FROM fortune
            ORDER BY random()
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(StoreError::Empty)
    }
}
