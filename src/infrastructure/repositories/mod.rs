// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_author;
mod postgres_category;
mod postgres_quote;
mod postgres_slug_counter;

pub use postgres_author::{PostgresAuthorReadRepository, PostgresAuthorWriteRepository};
pub use postgres_category::{PostgresCategoryReadRepository, PostgresCategoryWriteRepository};
pub use postgres_quote::{PostgresQuoteReadRepository, PostgresQuoteWriteRepository};
pub use postgres_slug_counter::PostgresSlugCounterStore;

pub(crate) use error::{escape_like, map_sqlx};
