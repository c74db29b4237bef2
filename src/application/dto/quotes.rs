use crate::application::dto::hrefs::HrefBuilder;
use crate::domain::author::Author;
use crate::domain::category::Category;
use crate::domain::quote::Quote;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Denormalized author/category reference: just the display name and a link.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntityRefDto {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuoteDto {
    pub id: String,
    pub quote: String,
    pub author: EntityRefDto,
    pub categories: Vec<EntityRefDto>,
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub href: String,
}

impl QuoteDto {
    /// Assemble the response shape from a quote and its already-loaded
    /// relations. Categories are emitted in the quote's own order.
    pub fn from_parts(
        quote: Quote,
        author: &Author,
        categories: &[Category],
        hrefs: &HrefBuilder,
    ) -> Self {
        let by_id: HashMap<&str, &Category> = categories
            .iter()
            .map(|category| (category.id.as_str(), category))
            .collect();

        let category_refs = quote
            .category_ids
            .iter()
            .filter_map(|id| by_id.get(id.as_str()))
            .map(|category| EntityRefDto {
                name: category.name.as_str().to_string(),
                href: hrefs.category(&category.id),
            })
            .collect();

        let href = hrefs.quote(&quote.id);
        Self {
            id: quote.id.into(),
            quote: quote.quote.into(),
            author: EntityRefDto {
                name: author.name.as_str().to_string(),
                href: hrefs.author(&author.id),
            },
            categories: category_refs,
            keywords: quote.keywords,
            created_at: quote.created_at,
            updated_at: quote.updated_at,
            href,
        }
    }
}
