use super::QuoteCommandService;
use crate::{
    application::{
        dto::QuoteDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        id::EntityId,
        quote::{QuoteText, QuoteUpdate},
    },
};

pub struct UpdateQuoteCommand {
    pub id: String,
    pub quote: Option<String>,
    pub author: Option<String>,
    pub categories: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
}

impl QuoteCommandService {
    pub async fn update_quote(&self, command: UpdateQuoteCommand) -> ApplicationResult<QuoteDto> {
        let id = EntityId::parse(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("quote not found"))?;

        let mut update = QuoteUpdate::new(id, self.clock.now());

        if let Some(raw) = command.quote {
            update = update.with_quote(QuoteText::new(raw)?);
        }
        if let Some(raw) = command.author {
            update = update.with_author_id(EntityId::parse(raw)?);
        }
        if let Some(raw) = command.categories {
            update = update.with_category_ids(Self::parse_category_ids(raw)?);
        }
        if let Some(keywords) = command.keywords {
            update = update.with_keywords(keywords);
        }

        let author_id = update
            .author_id
            .clone()
            .unwrap_or_else(|| existing.author_id.clone());
        let category_ids = update
            .category_ids
            .clone()
            .unwrap_or_else(|| existing.category_ids.clone());

        let author = self.load_author(&author_id).await?;
        let categories = self.load_categories(&category_ids).await?;

        let updated = self.write_repo.update(update).await?;
        Ok(QuoteDto::from_parts(updated, &author, &categories, &self.hrefs))
    }
}
