use super::CategoryQueryService;
use crate::application::{dto::CategoryDto, error::ApplicationResult, queries::normalize_page};

pub struct ListCategoriesQuery {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

impl CategoryQueryService {
    pub async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        let (limit, skip) = normalize_page(query.limit, query.skip);
        let categories = self.read_repo.list(limit, skip).await?;
        Ok(categories
            .into_iter()
            .map(|category| CategoryDto::from_entity(category, &self.hrefs))
            .collect())
    }
}
