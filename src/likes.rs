//! Blog like counts.
//!
//! Every call returns `Result<count, LikeError>` so callers decide what a
//! failed write means for the count they show.

use std::collections::HashMap;
use std::sync::Arc;
use sqlx::PgPool;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum LikeError {
    #[error("like store unavailable: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Clone, Debug)]
pub enum LikeStore {
    /// One row per like in `blog_likes`.
    Postgres(PgPool),
    Memory(Arc<Mutex<HashMap<u32, u64>>>),
}

impl LikeStore {
    pub fn memory() -> Self { Self::Memory(Arc::default()) }

    pub async fn count(&self, blog_id: u32) -> Result<u64, LikeError> {
        match self {
            Self::Postgres(db) => {
                let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blog_likes WHERE blog_id = $1")
                    .bind(blog_id.to_string()).fetch_one(db).await?;
                Ok(n.max(0) as u64)
            }
            Self::Memory(map) => Ok(map.lock().await.get(&blog_id).copied().unwrap_or(0)),
        }
    }

    /// Records one like and returns the new total.
    pub async fn like(&self, blog_id: u32) -> Result<u64, LikeError> {
        match self {
            Self::Postgres(db) => {
                sqlx::query("INSERT INTO blog_likes (id, blog_id) VALUES ($1, $2)")
                    .bind(Uuid::now_v7()).bind(blog_id.to_string()).execute(db).await?;
                self.count(blog_id).await
            }
            Self::Memory(map) => {
                let mut map = map.lock().await;
                let n = map.entry(blog_id).or_insert(0);
                *n += 1;
                Ok(*n)
            }
        }
    }
}
