// src/application/commands/authors/delete.rs
use super::AuthorCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::id::EntityId,
};

pub struct DeleteAuthorCommand {
    pub id: String,
}

impl AuthorCommandService {
    pub async fn delete_author(&self, command: DeleteAuthorCommand) -> ApplicationResult<()> {
        let id = EntityId::parse(command.id)?;
        self.read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;

        self.write_repo.delete(&id).await?;
        Ok(())
    }
}
