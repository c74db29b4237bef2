use crate::application::dto::hrefs::HrefBuilder;
use crate::domain::author::Author;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    pub href: String,
}

impl AuthorDto {
    pub fn from_entity(author: Author, hrefs: &HrefBuilder) -> Self {
        let href = hrefs.author(&author.id);
        Self {
            id: author.id.into(),
            name: author.name.into(),
            slug: author.slug.into(),
            image: author.image,
            nationality: author.nationality,
            profession: author.profession,
            href,
        }
    }
}
