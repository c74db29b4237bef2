// src/infrastructure/repositories/postgres_author.rs
use super::{escape_like, map_sqlx};
use crate::domain::author::{
    Author, AuthorName, AuthorReadRepository, AuthorUpdate, AuthorWriteRepository, NewAuthor,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::id::EntityId;
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const AUTHOR_COLUMNS: &str = "id, name, slug, image, nationality, profession";

#[derive(Clone)]
pub struct PostgresAuthorWriteRepository {
    pool: PgPool,
}

impl PostgresAuthorWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresAuthorReadRepository {
    pool: PgPool,
}

impl PostgresAuthorReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: String,
    name: String,
    slug: String,
    image: Option<String>,
    nationality: Option<String>,
    profession: Option<String>,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: EntityId::parse(row.id)?,
            name: AuthorName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            image: row.image,
            nationality: row.nationality,
            profession: row.profession,
        })
    }
}

#[async_trait]
impl AuthorWriteRepository for PostgresAuthorWriteRepository {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let NewAuthor {
            id,
            name,
            slug,
            image,
            nationality,
            profession,
        } = author;

        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO authors (id, name, slug, image, nationality, profession)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, name, slug, image, nationality, profession",
        )
        .bind(id.as_str())
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(image)
        .bind(nationality)
        .bind(profession)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Author::try_from(row)
    }

    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author> {
        let AuthorUpdate {
            id,
            name,
            slug,
            image,
            nationality,
            profession,
        } = update;

        // Callers guarantee at least one field is set.
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE authors SET ");
        let mut fields = builder.separated(", ");

        if let Some(name) = name {
            fields.push("name = ");
            fields.push_bind_unseparated(String::from(name));
        }
        if let Some(slug) = slug {
            fields.push("slug = ");
            fields.push_bind_unseparated(String::from(slug));
        }
        if let Some(image) = image {
            fields.push("image = ");
            fields.push_bind_unseparated(image);
        }
        if let Some(nationality) = nationality {
            fields.push("nationality = ");
            fields.push_bind_unseparated(nationality);
        }
        if let Some(profession) = profession {
            fields.push("profession = ");
            fields.push_bind_unseparated(profession);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.as_str().to_string());
        builder.push(" RETURNING id, name, slug, image, nationality, profession");

        let maybe_row = builder
            .build_query_as::<AuthorRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("author not found".into()))?;
        Author::try_from(row)
    }

    async fn delete(&self, id: &EntityId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("author not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthorReadRepository for PostgresAuthorReadRepository {
    async fn find_by_id(&self, id: &EntityId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[EntityId]) -> DomainResult<Vec<Author>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let id_strings: Vec<String> = ids.iter().map(|id| id.as_str().to_string()).collect();

        let rows = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = ANY($1)"
        ))
        .bind(&id_strings)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Author::try_from).collect()
    }

    async fn list(&self, limit: i64, skip: i64) -> DomainResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Author::try_from).collect()
    }

    async fn search_by_name(&self, query: &str) -> DomainResult<Vec<Author>> {
        let pattern = format!("%{}%", escape_like(query));

        let rows = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE name ILIKE $1 ORDER BY name"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Author::try_from).collect()
    }
}

#[async_trait]
impl SlugIndex for PostgresAuthorReadRepository {
    async fn slug_in_use(&self, slug: &Slug, exclude: Option<&EntityId>) -> DomainResult<bool> {
        let (in_use,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM authors
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
