use super::CategoryQueryService;
use crate::application::{dto::CategoryDto, error::ApplicationResult};

pub struct SearchCategoriesQuery {
    pub query: String,
}

impl CategoryQueryService {
    pub async fn search_categories(
        &self,
        query: SearchCategoriesQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.read_repo.search_by_name(query.query.trim()).await?;
        Ok(categories
            .into_iter()
            .map(|category| CategoryDto::from_entity(category, &self.hrefs))
            .collect())
    }
}
