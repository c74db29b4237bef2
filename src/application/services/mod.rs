// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            authors::AuthorCommandService, categories::CategoryCommandService,
            quotes::QuoteCommandService,
        },
        dto::HrefBuilder,
        ports::{time::Clock, util::SlugGenerator},
        queries::{
            authors::AuthorQueryService, categories::CategoryQueryService,
            quotes::QuoteQueryService,
        },
    },
    domain::{
        author::{AuthorReadRepository, AuthorWriteRepository},
        category::{CategoryReadRepository, CategoryWriteRepository},
        quote::{QuoteReadRepository, QuoteWriteRepository},
        slug::{SlugCounterStore, SlugIndex, UniqueSlugService},
    },
};

/// Dependency bundle handed to [`ApplicationServices::new`]. Slug indexes are
/// passed separately from the read repositories so the resolver only sees the
/// one probe it needs, even though Postgres backs both with the same table.
pub struct ApplicationDeps {
    pub author_write_repo: Arc<dyn AuthorWriteRepository>,
    pub author_read_repo: Arc<dyn AuthorReadRepository>,
    pub author_slug_index: Arc<dyn SlugIndex>,
    pub category_write_repo: Arc<dyn CategoryWriteRepository>,
    pub category_read_repo: Arc<dyn CategoryReadRepository>,
    pub category_slug_index: Arc<dyn SlugIndex>,
    pub quote_write_repo: Arc<dyn QuoteWriteRepository>,
    pub quote_read_repo: Arc<dyn QuoteReadRepository>,
    pub slug_counters: Arc<dyn SlugCounterStore>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub hrefs: HrefBuilder,
}

pub struct ApplicationServices {
    pub author_commands: Arc<AuthorCommandService>,
    pub author_queries: Arc<AuthorQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub quote_commands: Arc<QuoteCommandService>,
    pub quote_queries: Arc<QuoteQueryService>,
}

impl ApplicationServices {
    pub fn new(deps: ApplicationDeps) -> Self {
        let hrefs = Arc::new(deps.hrefs);

        // One resolver per named entity type (type-scoped uniqueness), both
        // drawing suffixes from the same shared counter store.
        let author_slugs = Arc::new(UniqueSlugService::new(
            deps.author_slug_index,
            Arc::clone(&deps.slug_counters),
            Arc::clone(&deps.slugger),
        ));
        let category_slugs = Arc::new(UniqueSlugService::new(
            deps.category_slug_index,
            Arc::clone(&deps.slug_counters),
            Arc::clone(&deps.slugger),
        ));

        let author_commands = Arc::new(AuthorCommandService::new(
            Arc::clone(&deps.author_write_repo),
            Arc::clone(&deps.author_read_repo),
            author_slugs,
            Arc::clone(&deps.clock),
            Arc::clone(&hrefs),
        ));
        let author_queries = Arc::new(AuthorQueryService::new(
            Arc::clone(&deps.author_read_repo),
            Arc::clone(&hrefs),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&deps.category_write_repo),
            Arc::clone(&deps.category_read_repo),
            category_slugs,
            Arc::clone(&deps.clock),
            Arc::clone(&hrefs),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&deps.category_read_repo),
            Arc::clone(&hrefs),
        ));

        let quote_commands = Arc::new(QuoteCommandService::new(
            Arc::clone(&deps.quote_write_repo),
            Arc::clone(&deps.quote_read_repo),
            Arc::clone(&deps.author_read_repo),
            Arc::clone(&deps.category_read_repo),
            Arc::clone(&deps.clock),
            Arc::clone(&hrefs),
        ));
        let quote_queries = Arc::new(QuoteQueryService::new(
            Arc::clone(&deps.quote_read_repo),
            Arc::clone(&deps.author_read_repo),
            Arc::clone(&deps.category_read_repo),
            Arc::clone(&hrefs),
        ));

        Self {
            author_commands,
            author_queries,
            category_commands,
            category_queries,
            quote_commands,
            quote_queries,
        }
    }
}
