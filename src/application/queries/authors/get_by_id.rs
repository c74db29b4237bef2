use super::AuthorQueryService;
use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::id::EntityId,
};

pub struct GetAuthorByIdQuery {
    pub id: String,
}

impl AuthorQueryService {
    pub async fn get_author_by_id(&self, query: GetAuthorByIdQuery) -> ApplicationResult<AuthorDto> {
        let id = EntityId::parse(query.id)?;
        let author = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;
        Ok(AuthorDto::from_entity(author, &self.hrefs))
    }
}
