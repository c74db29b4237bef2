use crate::application::dto::hrefs::HrefBuilder;
use crate::domain::category::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub href: String,
}

impl CategoryDto {
    pub fn from_entity(category: Category, hrefs: &HrefBuilder) -> Self {
        let href = hrefs.category(&category.id);
        Self {
            id: category.id.into(),
            name: category.name.into(),
            slug: category.slug.into(),
            href,
        }
    }
}
