// src/domain/author/entity.rs
use crate::domain::author::value_objects::AuthorName;
use crate::domain::id::EntityId;
use crate::domain::slug::Slug;

#[derive(Debug, Clone)]
pub struct Author {
    pub id: EntityId,
    pub name: AuthorName,
    pub slug: Slug,
    pub image: Option<String>,
    pub nationality: Option<String>,
    pub profession: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub id: EntityId,
    pub name: AuthorName,
    pub slug: Slug,
    pub image: Option<String>,
    pub nationality: Option<String>,
    pub profession: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone)]
pub struct AuthorUpdate {
    pub id: EntityId,
    pub name: Option<AuthorName>,
    pub slug: Option<Slug>,
    pub image: Option<String>,
    pub nationality: Option<String>,
    pub profession: Option<String>,
}

impl AuthorUpdate {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            image: None,
            nationality: None,
            profession: None,
        }
    }

    pub fn with_name(mut self, name: AuthorName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_nationality(mut self, nationality: String) -> Self {
        self.nationality = Some(nationality);
        self
    }

    pub fn with_profession(mut self, profession: String) -> Self {
        self.profession = Some(profession);
        self
    }

    pub fn is_noop(&self) -> bool {
        self.name.is_none()
            && self.slug.is_none()
            && self.image.is_none()
            && self.nationality.is_none()
            && self.profession.is_none()
    }
}
