// src/infrastructure/repositories/postgres_category.rs
use super::{escape_like, map_sqlx};
use crate::domain::category::{
    Category, CategoryName, CategoryReadRepository, CategoryUpdate, CategoryWriteRepository,
    NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::id::EntityId;
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresCategoryWriteRepository {
    pool: PgPool,
}

impl PostgresCategoryWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCategoryReadRepository {
    pool: PgPool,
}

impl PostgresCategoryReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: String,
    name: String,
    slug: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: EntityId::parse(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: Slug::new(row.slug)?,
        })
    }
}

#[async_trait]
impl CategoryWriteRepository for PostgresCategoryWriteRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory { id, name, slug } = category;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (id, name, slug)
             VALUES ($1, $2, $3)
             RETURNING id, name, slug",
        )
        .bind(id.as_str())
        .bind(name.as_str())
        .bind(slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let CategoryUpdate { id, name, slug } = update;

        // Callers guarantee at least one field is set.
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE categories SET ");
        let mut fields = builder.separated(", ");

        if let Some(name) = name {
            fields.push("name = ");
            fields.push_bind_unseparated(String::from(name));
        }
        if let Some(slug) = slug {
            fields.push("slug = ");
            fields.push_bind_unseparated(String::from(slug));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.as_str().to_string());
        builder.push(" RETURNING id, name, slug");

        let maybe_row = builder
            .build_query_as::<CategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        Category::try_from(row)
    }

    async fn delete(&self, id: &EntityId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryReadRepository for PostgresCategoryReadRepository {
    async fn find_by_id(&self, id: &EntityId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug FROM categories WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[EntityId]) -> DomainResult<Vec<Category>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let id_strings: Vec<String> = ids.iter().map(|id| id.as_str().to_string()).collect();

        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug FROM categories WHERE id = ANY($1)",
        )
        .bind(&id_strings)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn list(&self, limit: i64, skip: i64) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug FROM categories ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn search_by_name(&self, query: &str) -> DomainResult<Vec<Category>> {
        let pattern = format!("%{}%", escape_like(query));

        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug FROM categories WHERE name ILIKE $1 ORDER BY name",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}

#[async_trait]
impl SlugIndex for PostgresCategoryReadRepository {
    async fn slug_in_use(&self, slug: &Slug, exclude: Option<&EntityId>) -> DomainResult<bool> {
        let (in_use,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM categories
                 WHERE slug = $1 AND ($2::text IS NULL OR id <> $2)
             )",
        )
        .bind(slug.as_str())
        .bind(exclude.map(|id| id.as_str().to_string()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(in_use)
    }
}
