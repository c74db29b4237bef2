use super::CategoryQueryService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::id::EntityId,
};

pub struct GetCategoryByIdQuery {
    pub id: String,
}

impl CategoryQueryService {
    pub async fn get_category_by_id(
        &self,
        query: GetCategoryByIdQuery,
    ) -> ApplicationResult<CategoryDto> {
        let id = EntityId::parse(query.id)?;
        let category = self
            .read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        Ok(CategoryDto::from_entity(category, &self.hrefs))
    }
}
