use super::QuoteQueryService;
use crate::application::{dto::QuoteDto, error::ApplicationResult};

pub struct RandomQuotesQuery {
    pub limit: Option<i64>,
}

impl QuoteQueryService {
    /// Draw a random sample of quotes; one by default.
    pub async fn random_quotes(&self, query: RandomQuotesQuery) -> ApplicationResult<Vec<QuoteDto>> {
        let limit = query.limit.unwrap_or(1).clamp(1, 100);
        let quotes = self.read_repo.random(limit).await?;
        self.hydrate(quotes).await
    }
}
