use super::AuthorCommandService;
use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        author::{AuthorName, AuthorUpdate},
        id::EntityId,
    },
};

pub struct UpdateAuthorCommand {
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image: Option<String>,
    pub nationality: Option<String>,
    pub profession: Option<String>,
}

impl AuthorCommandService {
    pub async fn update_author(
        &self,
        command: UpdateAuthorCommand,
    ) -> ApplicationResult<AuthorDto> {
        let id = EntityId::parse(command.id)?;
        let author = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;

        let mut update = AuthorUpdate::new(id.clone());

        let name_opt = command.name.map(AuthorName::new).transpose()?;
        if let Some(name) = &name_opt {
            update = update.with_name(name.clone());
        }

        // Slug resolution runs only when name or slug actually changes hands;
        // the record's own id is excluded so an unchanged name keeps its slug.
        if name_opt.is_some() || command.slug.is_some() {
            let name_for_slug = name_opt.as_ref().unwrap_or(&author.name);
            let slug = self
                .slug_service
                .resolve(name_for_slug.as_str(), command.slug.as_deref(), Some(&id))
                .await?;
            update = update.with_slug(slug);
        }

        if let Some(image) = command.image {
            update = update.with_image(image);
        }
        if let Some(nationality) = command.nationality {
            update = update.with_nationality(nationality);
        }
        if let Some(profession) = command.profession {
            update = update.with_profession(profession);
        }

        if update.is_noop() {
            return Ok(AuthorDto::from_entity(author, &self.hrefs));
        }

        let updated = self.write_repo.update(update).await?;
        Ok(AuthorDto::from_entity(updated, &self.hrefs))
    }
}
