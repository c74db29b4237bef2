// src/application/queries/quotes/service.rs
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    application::{
        dto::{HrefBuilder, QuoteDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        author::AuthorReadRepository,
        category::CategoryReadRepository,
        id::EntityId,
        quote::{Quote, QuoteReadRepository},
    },
};

pub struct QuoteQueryService {
    pub(super) read_repo: Arc<dyn QuoteReadRepository>,
    pub(super) author_repo: Arc<dyn AuthorReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
    pub(super) hrefs: Arc<HrefBuilder>,
}

impl QuoteQueryService {
    pub fn new(
        read_repo: Arc<dyn QuoteReadRepository>,
        author_repo: Arc<dyn AuthorReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        hrefs: Arc<HrefBuilder>,
    ) -> Self {
        Self {
            read_repo,
            author_repo,
            category_repo,
            hrefs,
        }
    }

    /// Resolve the author and category references for a page of quotes with
    /// two batch lookups, then shape each quote into its response form.
    pub(super) async fn hydrate(&self, quotes: Vec<Quote>) -> ApplicationResult<Vec<QuoteDto>> {
        let mut author_ids: Vec<EntityId> = Vec::new();
        let mut category_ids: Vec<EntityId> = Vec::new();
        for quote in &quotes {
            if !author_ids.contains(&quote.author_id) {
                author_ids.push(quote.author_id.clone());
            }
            for id in &quote.category_ids {
                if !category_ids.contains(id) {
                    category_ids.push(id.clone());
                }
            }
        }

        let authors = self.author_repo.find_by_ids(&author_ids).await?;
        let categories = self.category_repo.find_by_ids(&category_ids).await?;

        let authors_by_id: HashMap<String, _> = authors
            .into_iter()
            .map(|author| (author.id.as_str().to_string(), author))
            .collect();
        let categories_by_id: HashMap<String, _> = categories
            .into_iter()
            .map(|category| (category.id.as_str().to_string(), category))
            .collect();

        let mut dtos = Vec::with_capacity(quotes.len());
        for quote in quotes {
            let author = authors_by_id.get(quote.author_id.as_str()).ok_or_else(|| {
                ApplicationError::infrastructure("quote references a missing author")
            })?;
            let quote_categories: Vec<_> = quote
                .category_ids
                .iter()
                .filter_map(|id| categories_by_id.get(id.as_str()).cloned())
                .collect();
            dtos.push(QuoteDto::from_parts(
                quote,
                author,
                &quote_categories,
                &self.hrefs,
            ));
        }
        Ok(dtos)
    }
}
