use super::QuoteQueryService;
use crate::application::{dto::QuoteDto, error::ApplicationResult, queries::normalize_page};

pub struct ListQuotesQuery {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

impl QuoteQueryService {
    pub async fn list_quotes(&self, query: ListQuotesQuery) -> ApplicationResult<Vec<QuoteDto>> {
        let (limit, skip) = normalize_page(query.limit, query.skip);
        let quotes = self.read_repo.list(limit, skip).await?;
        self.hydrate(quotes).await
    }
}
