// src/domain/quote/entity.rs
use crate::domain::id::EntityId;
use crate::domain::quote::value_objects::QuoteText;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Quote {
    pub id: EntityId,
    pub quote: QuoteText,
    pub author_id: EntityId,
    pub category_ids: Vec<EntityId>,
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewQuote {
    pub id: EntityId,
    pub quote: QuoteText,
    pub author_id: EntityId,
    pub category_ids: Vec<EntityId>,
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone)]
pub struct QuoteUpdate {
    pub id: EntityId,
    pub quote: Option<QuoteText>,
    pub author_id: Option<EntityId>,
    pub category_ids: Option<Vec<EntityId>>,
    pub keywords: Option<Vec<String>>,
    pub updated_at: DateTime<Utc>,
}

impl QuoteUpdate {
    pub fn new(id: EntityId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            quote: None,
            author_id: None,
            category_ids: None,
            keywords: None,
            updated_at,
        }
    }

    pub fn with_quote(mut self, quote: QuoteText) -> Self {
        self.quote = Some(quote);
        self
    }

    pub fn with_author_id(mut self, author_id: EntityId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn with_category_ids(mut self, category_ids: Vec<EntityId>) -> Self {
        self.category_ids = Some(category_ids);
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }
}
