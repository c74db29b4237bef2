// tests/support/mocks/counters.rs
use async_trait::async_trait;
use quotery::domain::errors::DomainResult;
use quotery::domain::slug::SlugCounterStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// Single-process stand-in for the Postgres counter table: one mutex-guarded
/// map, so the increment is atomic the same way the SQL upsert is.
#[derive(Default)]
pub struct InMemorySlugCounterStore {
    counts: Mutex<HashMap<String, i64>>,
}

impl InMemorySlugCounterStore {
    pub fn value_of(&self, base_slug: &str) -> Option<i64> {
        self.counts.lock().unwrap().get(base_slug).copied()
    }
}

#[async_trait]
impl SlugCounterStore for InMemorySlugCounterStore {
    async fn increment_and_get(&self, base_slug: &str) -> DomainResult<i64> {
        let mut counts = self.counts.lock().unwrap();
        let count = counts.entry(base_slug.to_string()).or_insert(1);
        *count += 1;
        Ok(*count)
    }
}
