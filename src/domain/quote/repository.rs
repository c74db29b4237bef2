use crate::domain::errors::DomainResult;
use crate::domain::id::EntityId;
use crate::domain::quote::entity::{NewQuote, Quote, QuoteUpdate};
use async_trait::async_trait;

#[async_trait]
pub trait QuoteWriteRepository: Send + Sync {
    async fn insert(&self, quote: NewQuote) -> DomainResult<Quote>;
    async fn update(&self, update: QuoteUpdate) -> DomainResult<Quote>;
    async fn delete(&self, id: &EntityId) -> DomainResult<()>;
}

#[async_trait]
pub trait QuoteReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> DomainResult<Option<Quote>>;
    async fn list(&self, limit: i64, skip: i64) -> DomainResult<Vec<Quote>>;
    /// Full-text match over the quote body, best matches first.
    async fn search_text(&self, query: &str, limit: i64, skip: i64) -> DomainResult<Vec<Quote>>;
    async fn random(&self, limit: i64) -> DomainResult<Vec<Quote>>;
}
