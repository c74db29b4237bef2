// src/infrastructure/repositories/postgres_quote.rs
use std::collections::HashMap;

use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::id::EntityId;
use crate::domain::quote::{
    NewQuote, Quote, QuoteReadRepository, QuoteText, QuoteUpdate, QuoteWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const QUOTE_COLUMNS: &str = "id, quote, author_id, keywords, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresQuoteWriteRepository {
    pool: PgPool,
}

impl PostgresQuoteWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresQuoteReadRepository {
    pool: PgPool,
}

impl PostgresQuoteReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct QuoteRow {
    id: String,
    quote: String,
    author_id: String,
    keywords: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl QuoteRow {
    fn into_quote(self, category_ids: Vec<EntityId>) -> DomainResult<Quote> {
        Ok(Quote {
            id: EntityId::parse(self.id)?,
            quote: QuoteText::new(self.quote)?,
            author_id: EntityId::parse(self.author_id)?,
            category_ids,
            keywords: self.keywords,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Category links per quote, in the order the caller supplied them.
async fn load_category_ids<'e, E>(
    executor: E,
    quote_ids: &[String],
) -> DomainResult<HashMap<String, Vec<EntityId>>>
where
    E: sqlx::PgExecutor<'e>,
{
    if quote_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT quote_id, category_id FROM quote_categories
         WHERE quote_id = ANY($1)
         ORDER BY quote_id, position",
    )
    .bind(quote_ids)
    .fetch_all(executor)
    .await
    .map_err(map_sqlx)?;

    let mut links: HashMap<String, Vec<EntityId>> = HashMap::new();
    for (quote_id, category_id) in rows {
        links
            .entry(quote_id)
            .or_default()
            .push(EntityId::parse(category_id)?);
    }
    Ok(links)
}

async fn insert_category_links(
    conn: &mut sqlx::PgConnection,
    quote_id: &str,
    category_ids: &[EntityId],
) -> DomainResult<()> {
    for (position, category_id) in category_ids.iter().enumerate() {
        sqlx::query(
            "INSERT INTO quote_categories (quote_id, category_id, position)
             VALUES ($1, $2, $3)",
        )
        .bind(quote_id)
        .bind(category_id.as_str())
        .bind(position as i32)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    }
    Ok(())
}

impl PostgresQuoteReadRepository {
    async fn attach_categories(&self, rows: Vec<QuoteRow>) -> DomainResult<Vec<Quote>> {
        let quote_ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();
        let mut links = load_category_ids(&self.pool, &quote_ids).await?;

        rows.into_iter()
            .map(|row| {
                let category_ids = links.remove(&row.id).unwrap_or_default();
                row.into_quote(category_ids)
            })
            .collect()
    }
}

#[async_trait]
impl QuoteWriteRepository for PostgresQuoteWriteRepository {
    async fn insert(&self, quote: NewQuote) -> DomainResult<Quote> {
        let NewQuote {
            id,
            quote,
            author_id,
            category_ids,
            keywords,
            created_at,
            updated_at,
        } = quote;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, QuoteRow>(
            "INSERT INTO quotes (id, quote, author_id, keywords, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, quote, author_id, keywords, created_at, updated_at",
        )
        .bind(id.as_str())
        .bind(quote.as_str())
        .bind(author_id.as_str())
        .bind(&keywords)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        insert_category_links(&mut tx, &row.id, &category_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_quote(category_ids)
    }

    async fn update(&self, update: QuoteUpdate) -> DomainResult<Quote> {
        let QuoteUpdate {
            id,
            quote,
            author_id,
            category_ids,
            keywords,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE quotes SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(quote) = quote {
            builder.push(", quote = ");
            builder.push_bind(String::from(quote));
        }
        if let Some(author_id) = author_id {
            builder.push(", author_id = ");
            builder.push_bind(author_id.as_str().to_string());
        }
        if let Some(keywords) = keywords {
            builder.push(", keywords = ");
            builder.push_bind(keywords);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.as_str().to_string());
        builder.push(" RETURNING id, quote, author_id, keywords, created_at, updated_at");

        let maybe_row = builder
            .build_query_as::<QuoteRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("quote not found".into()))?;

        let category_ids = if let Some(category_ids) = category_ids {
            sqlx::query("DELETE FROM quote_categories WHERE quote_id = $1")
                .bind(&row.id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            insert_category_links(&mut tx, &row.id, &category_ids).await?;
            category_ids
        } else {
            load_category_ids(&mut *tx, std::slice::from_ref(&row.id))
                .await?
                .remove(&row.id)
                .unwrap_or_default()
        };

        tx.commit().await.map_err(map_sqlx)?;

        row.into_quote(category_ids)
    }

    async fn delete(&self, id: &EntityId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("quote not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl QuoteReadRepository for PostgresQuoteReadRepository {
    async fn find_by_id(&self, id: &EntityId) -> DomainResult<Option<Quote>> {
        let row = sqlx::query_as::<_, QuoteRow>(&format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(Some(self.attach_categories(vec![row]).await?.remove(0))),
            None => Ok(None),
        }
    }

    async fn list(&self, limit: i64, skip: i64) -> DomainResult<Vec<Quote>> {
        let rows = sqlx::query_as::<_, QuoteRow>(&format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.attach_categories(rows).await
    }

    async fn search_text(&self, query: &str, limit: i64, skip: i64) -> DomainResult<Vec<Quote>> {
        let rows = sqlx::query_as::<_, QuoteRow>(&format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes
             WHERE search @@ plainto_tsquery('simple', $1)
             ORDER BY ts_rank(search, plainto_tsquery('simple', $1)) DESC,
                      created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(query)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.attach_categories(rows).await
    }

    async fn random(&self, limit: i64) -> DomainResult<Vec<Quote>> {
        let rows = sqlx::query_as::<_, QuoteRow>(&format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes ORDER BY random() LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.attach_categories(rows).await
    }
}
