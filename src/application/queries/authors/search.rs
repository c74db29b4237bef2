use super::AuthorQueryService;
use crate::application::{dto::AuthorDto, error::ApplicationResult};

pub struct SearchAuthorsQuery {
    pub query: String,
}

impl AuthorQueryService {
    /// Case-insensitive substring match on the author name.
    pub async fn search_authors(
        &self,
        query: SearchAuthorsQuery,
    ) -> ApplicationResult<Vec<AuthorDto>> {
        let authors = self.read_repo.search_by_name(query.query.trim()).await?;
        Ok(authors
            .into_iter()
            .map(|author| AuthorDto::from_entity(author, &self.hrefs))
            .collect())
    }
}
