use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::errors::DomainResult;
use crate::domain::id::EntityId;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryWriteRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    async fn delete(&self, id: &EntityId) -> DomainResult<()>;
}

#[async_trait]
pub trait CategoryReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> DomainResult<Option<Category>>;
    async fn find_by_ids(&self, ids: &[EntityId]) -> DomainResult<Vec<Category>>;
    async fn list(&self, limit: i64, skip: i64) -> DomainResult<Vec<Category>>;
    async fn search_by_name(&self, query: &str) -> DomainResult<Vec<Category>>;
}
