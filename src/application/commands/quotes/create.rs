// src/application/commands/quotes/create.rs
use super::QuoteCommandService;
use crate::{
    application::{dto::QuoteDto, error::ApplicationResult},
    domain::{
        id::EntityId,
        quote::{NewQuote, QuoteText},
    },
};

pub struct CreateQuoteCommand {
    pub quote: String,
    pub author: String,
    pub categories: Vec<String>,
    pub keywords: Vec<String>,
}

impl QuoteCommandService {
    pub async fn create_quote(&self, command: CreateQuoteCommand) -> ApplicationResult<QuoteDto> {
        let text = QuoteText::new(command.quote)?;
        let author_id = EntityId::parse(command.author)?;
        let category_ids = Self::parse_category_ids(command.categories)?;

        let author = self.load_author(&author_id).await?;
        let categories = self.load_categories(&category_ids).await?;

        let now = self.clock.now();
        let new_quote = NewQuote {
            id: EntityId::generate(now),
            quote: text,
            author_id,
            category_ids,
            keywords: command.keywords,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_quote).await?;
        Ok(QuoteDto::from_parts(created, &author, &categories, &self.hrefs))
    }
}
