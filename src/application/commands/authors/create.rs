// src/application/commands/authors/create.rs
use super::AuthorCommandService;
use crate::{
    application::{dto::AuthorDto, error::ApplicationResult},
    domain::{
        author::{AuthorName, NewAuthor},
        id::EntityId,
    },
};

pub struct CreateAuthorCommand {
    pub name: String,
    pub slug: Option<String>,
    pub image: Option<String>,
    pub nationality: Option<String>,
    pub profession: Option<String>,
}

impl AuthorCommandService {
    pub async fn create_author(
        &self,
        command: CreateAuthorCommand,
    ) -> ApplicationResult<AuthorDto> {
        let name = AuthorName::new(command.name)?;

        let slug = self
            .slug_service
            .resolve(name.as_str(), command.slug.as_deref(), None)
            .await?;

        let now = self.clock.now();
        let new_author = NewAuthor {
            id: EntityId::generate(now),
            name,
            slug,
            image: command.image,
            nationality: command.nationality,
            profession: command.profession,
        };

        let created = self.write_repo.insert(new_author).await?;
        Ok(AuthorDto::from_entity(created, &self.hrefs))
    }
}
