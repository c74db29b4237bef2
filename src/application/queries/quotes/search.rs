use super::QuoteQueryService;
use crate::application::{dto::QuoteDto, error::ApplicationResult, queries::normalize_page};

pub struct SearchQuotesQuery {
    pub query: String,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

impl QuoteQueryService {
    /// Full-text search over quote bodies, paged like a listing.
    pub async fn search_quotes(&self, query: SearchQuotesQuery) -> ApplicationResult<Vec<QuoteDto>> {
        let (limit, skip) = normalize_page(query.limit, query.skip);
        let quotes = self
            .read_repo
            .search_text(query.query.trim(), limit, skip)
            .await?;
        self.hydrate(quotes).await
    }
}
