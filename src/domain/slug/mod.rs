// src/domain/slug/mod.rs
pub mod service;

pub use service::UniqueSlugService;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::id::EntityId;
use async_trait::async_trait;
use std::fmt;

/// URL token for a named record. Lowercase alphanumerics and hyphens only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(DomainError::Validation(
                "slug may only contain lowercase letters, digits and hyphens".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Existence probe over one entity type's slug column. `exclude` carries the
/// record's own id during updates so an unchanged name does not read as a
/// collision with itself.
#[async_trait]
pub trait SlugIndex: Send + Sync {
    async fn slug_in_use(&self, slug: &Slug, exclude: Option<&EntityId>) -> DomainResult<bool>;
}

/// Shared collision-counter table, one row per base slug. The increment must
/// be a single atomic read-modify-write at the storage layer; concurrent
/// callers for the same key must each observe a distinct value.
#[async_trait]
pub trait SlugCounterStore: Send + Sync {
    async fn increment_and_get(&self, base_slug: &str) -> DomainResult<i64>;
}
