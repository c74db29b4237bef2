// src/domain/category/entity.rs
use crate::domain::category::value_objects::CategoryName;
use crate::domain::id::EntityId;
use crate::domain::slug::Slug;

#[derive(Debug, Clone)]
pub struct Category {
    pub id: EntityId,
    pub name: CategoryName,
    pub slug: Slug,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub id: EntityId,
    pub name: CategoryName,
    pub slug: Slug,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: EntityId,
    pub name: Option<CategoryName>,
    pub slug: Option<Slug>,
}

impl CategoryUpdate {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            name: None,
            slug: None,
        }
    }

    pub fn with_name(mut self, name: CategoryName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn is_noop(&self) -> bool {
        self.name.is_none() && self.slug.is_none()
    }
}
