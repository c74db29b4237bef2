// src/application/commands/quotes/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::HrefBuilder,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        author::{Author, AuthorReadRepository},
        category::{Category, CategoryReadRepository},
        id::EntityId,
        quote::{QuoteReadRepository, QuoteWriteRepository},
    },
};

pub struct QuoteCommandService {
    pub(super) write_repo: Arc<dyn QuoteWriteRepository>,
    pub(super) read_repo: Arc<dyn QuoteReadRepository>,
    pub(super) author_repo: Arc<dyn AuthorReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) hrefs: Arc<HrefBuilder>,
}

impl QuoteCommandService {
    pub fn new(
        write_repo: Arc<dyn QuoteWriteRepository>,
        read_repo: Arc<dyn QuoteReadRepository>,
        author_repo: Arc<dyn AuthorReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        clock: Arc<dyn Clock>,
        hrefs: Arc<HrefBuilder>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            author_repo,
            category_repo,
            clock,
            hrefs,
        }
    }

    /// Both referenced records must exist before a quote is written; a
    /// dangling reference is a caller error, not a storage one.
    pub(super) async fn load_author(&self, id: &EntityId) -> ApplicationResult<Author> {
        self.author_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::validation("author does not exist"))
    }

    pub(super) async fn load_categories(
        &self,
        ids: &[EntityId],
    ) -> ApplicationResult<Vec<Category>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let categories = self.category_repo.find_by_ids(ids).await?;
        if categories.len() != ids.len() {
            return Err(ApplicationError::validation("category does not exist"));
        }
        Ok(categories)
    }

    /// Parse and de-duplicate the raw category id list, keeping caller order.
    pub(super) fn parse_category_ids(raw: Vec<String>) -> ApplicationResult<Vec<EntityId>> {
        let mut ids: Vec<EntityId> = Vec::with_capacity(raw.len());
        for value in raw {
            let id = EntityId::parse(value)?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}
