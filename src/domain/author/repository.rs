use crate::domain::author::entity::{Author, AuthorUpdate, NewAuthor};
use crate::domain::errors::DomainResult;
use crate::domain::id::EntityId;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorWriteRepository: Send + Sync {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author>;
    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author>;
    async fn delete(&self, id: &EntityId) -> DomainResult<()>;
}

#[async_trait]
pub trait AuthorReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> DomainResult<Option<Author>>;
    async fn find_by_ids(&self, ids: &[EntityId]) -> DomainResult<Vec<Author>>;
    async fn list(&self, limit: i64, skip: i64) -> DomainResult<Vec<Author>>;
    async fn search_by_name(&self, query: &str) -> DomainResult<Vec<Author>>;
}
