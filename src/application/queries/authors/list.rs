use super::AuthorQueryService;
use crate::application::{dto::AuthorDto, error::ApplicationResult, queries::normalize_page};

pub struct ListAuthorsQuery {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

impl AuthorQueryService {
    pub async fn list_authors(&self, query: ListAuthorsQuery) -> ApplicationResult<Vec<AuthorDto>> {
        let (limit, skip) = normalize_page(query.limit, query.skip);
        let authors = self.read_repo.list(limit, skip).await?;
        Ok(authors
            .into_iter()
            .map(|author| AuthorDto::from_entity(author, &self.hrefs))
            .collect())
    }
}
