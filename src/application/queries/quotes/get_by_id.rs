use super::QuoteQueryService;
use crate::{
    application::{
        dto::QuoteDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::id::EntityId,
};

pub struct GetQuoteByIdQuery {
    pub id: String,
}

impl QuoteQueryService {
    pub async fn get_quote_by_id(&self, query: GetQuoteByIdQuery) -> ApplicationResult<QuoteDto> {
        let id = EntityId::parse(query.id)?;
        let quote = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("quote not found"))?;

        let mut dtos = self.hydrate(vec![quote]).await?;
        dtos.pop()
            .ok_or_else(|| ApplicationError::infrastructure("hydration dropped the quote"))
    }
}
