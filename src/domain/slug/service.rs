// src/domain/slug/service.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::id::EntityId;
use crate::domain::slug::{Slug, SlugCounterStore, SlugIndex};

/// Domain service that guarantees a collision-free slug for a named record
/// before it is persisted.
///
/// The probe against the index and the counter increment are two separate
/// storage calls; only the increment is atomic. Two saves racing on a brand
/// new base slug can therefore both see it as free, and the unique index on
/// the slug column settles that case. Once a base slug exists, every further
/// claim is serialized through the counter and gets a distinct suffix.
pub struct UniqueSlugService {
    index: Arc<dyn SlugIndex>,
    counters: Arc<dyn SlugCounterStore>,
    generator: Arc<dyn SlugGenerator>,
}

impl UniqueSlugService {
    pub fn new(
        index: Arc<dyn SlugIndex>,
        counters: Arc<dyn SlugCounterStore>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            index,
            counters,
            generator,
        }
    }

    /// Resolve the slug to persist for an entity named `name`.
    ///
    /// A caller-supplied slug overrides the derived one. `exclude` is the
    /// record's own id on updates, so keeping the same name does not count
    /// as a collision and inflate the suffix.
    pub async fn resolve(
        &self,
        name: &str,
        supplied: Option<&str>,
        exclude: Option<&EntityId>,
    ) -> DomainResult<Slug> {
        let base = match supplied {
            Some(raw) => Slug::new(raw.trim().to_ascii_lowercase())?,
            None => Slug::new(self.generator.slugify(name))?,
        };

        if !self.index.slug_in_use(&base, exclude).await? {
            return Ok(base);
        }

        // Counter value after the atomic increment is the number of claims
        // on this base slug; the first collision lands at 2.
        let count = self.counters.increment_and_get(base.as_str()).await?;
        Slug::new(format!("{base}-{count}"))
    }
}
