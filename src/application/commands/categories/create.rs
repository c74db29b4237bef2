use super::CategoryCommandService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::{
        category::{CategoryName, NewCategory},
        id::EntityId,
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;

        let slug = self
            .slug_service
            .resolve(name.as_str(), command.slug.as_deref(), None)
            .await?;

        let new_category = NewCategory {
            id: EntityId::generate(self.clock.now()),
            name,
            slug,
        };

        let created = self.write_repo.insert(new_category).await?;
        Ok(CategoryDto::from_entity(created, &self.hrefs))
    }
}
