use super::QuoteCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::id::EntityId,
};

pub struct DeleteQuoteCommand {
    pub id: String,
}

impl QuoteCommandService {
    pub async fn delete_quote(&self, command: DeleteQuoteCommand) -> ApplicationResult<()> {
        let id = EntityId::parse(command.id)?;
        self.read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("quote not found"))?;

        self.write_repo.delete(&id).await?;
        Ok(())
    }
}
