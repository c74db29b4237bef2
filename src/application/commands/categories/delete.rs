use super::CategoryCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::id::EntityId,
};

pub struct DeleteCategoryCommand {
    pub id: String,
}

impl CategoryCommandService {
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = EntityId::parse(command.id)?;
        self.read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        self.write_repo.delete(&id).await?;
        Ok(())
    }
}
