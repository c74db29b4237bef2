// src/infrastructure/repositories/postgres_slug_counter.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::slug::SlugCounterStore;
use async_trait::async_trait;
use sqlx::PgPool;

/// Collision counters backed by one atomic upsert. The whole uniqueness
/// guarantee rests on this being a single statement: concurrent claims on
/// the same base slug are serialized by the row lock, so every caller gets
/// a distinct value back.
#[derive(Clone)]
pub struct PostgresSlugCounterStore {
    pool: PgPool,
}

impl PostgresSlugCounterStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlugCounterStore for PostgresSlugCounterStore {
    async fn increment_and_get(&self, base_slug: &str) -> DomainResult<i64> {
        // The stored value is the number of claims on the base slug; the
        // first collision therefore lands at 2.
        let (count,): (i64,) = sqlx::query_as(
            "INSERT INTO slug_counters (slug, count)
             VALUES ($1, 2)
             ON CONFLICT (slug) DO UPDATE SET count = slug_counters.count + 1
             RETURNING count",
        )
        .bind(base_slug)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(count)
    }
}
