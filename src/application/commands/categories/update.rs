use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{CategoryName, CategoryUpdate},
        id::EntityId,
    },
};

pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = EntityId::parse(command.id)?;
        let category = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let mut update = CategoryUpdate::new(id.clone());

        let name_opt = command.name.map(CategoryName::new).transpose()?;
        if let Some(name) = &name_opt {
            update = update.with_name(name.clone());
        }

        if name_opt.is_some() || command.slug.is_some() {
            let name_for_slug = name_opt.as_ref().unwrap_or(&category.name);
            let slug = self
                .slug_service
                .resolve(name_for_slug.as_str(), command.slug.as_deref(), Some(&id))
                .await?;
            update = update.with_slug(slug);
        }

        if update.is_noop() {
            return Ok(CategoryDto::from_entity(category, &self.hrefs));
        }

        let updated = self.write_repo.update(update).await?;
        Ok(CategoryDto::from_entity(updated, &self.hrefs))
    }
}
