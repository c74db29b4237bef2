// tests/support/mocks/repos.rs
//
// Functional in-memory repositories so end-to-end flows run without a
// database. Each store is a mutex-guarded Vec behind the same traits the
// Postgres repositories implement.
use async_trait::async_trait;
use quotery::domain::author::{
    Author, AuthorReadRepository, AuthorUpdate, AuthorWriteRepository, NewAuthor,
};
use quotery::domain::category::{
    Category, CategoryReadRepository, CategoryUpdate, CategoryWriteRepository, NewCategory,
};
use quotery::domain::errors::{DomainError, DomainResult};
use quotery::domain::id::EntityId;
use quotery::domain::quote::{
    NewQuote, Quote, QuoteReadRepository, QuoteUpdate, QuoteWriteRepository,
};
use quotery::domain::slug::{Slug, SlugIndex};
use std::sync::Mutex;

fn page<T: Clone>(rows: &[T], limit: i64, skip: i64) -> Vec<T> {
    rows.iter()
        .skip(skip as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}

/* -------------------------------- Authors -------------------------------- */

#[derive(Default)]
pub struct InMemoryAuthors {
    rows: Mutex<Vec<Author>>,
}

#[async_trait]
impl AuthorWriteRepository for InMemoryAuthors {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let author = Author {
            id: author.id,
            name: author.name,
            slug: author.slug,
            image: author.image,
            nationality: author.nationality,
            profession: author.profession,
        };
        self.rows.lock().unwrap().push(author.clone());
        Ok(author)
    }

    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author> {
        let mut rows = self.rows.lock().unwrap();
        let author = rows
            .iter_mut()
            .find(|author| author.id == update.id)
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;

        if let Some(name) = update.name {
            author.name = name;
        }
        if let Some(slug) = update.slug {
            author.slug = slug;
        }
        if let Some(image) = update.image {
            author.image = Some(image);
        }
        if let Some(nationality) = update.nationality {
            author.nationality = Some(nationality);
        }
        if let Some(profession) = update.profession {
            author.profession = Some(profession);
        }
        Ok(author.clone())
    }

    async fn delete(&self, id: &EntityId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|author| author.id != *id);
        if rows.len() == before {
            return Err(DomainError::NotFound("author not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthorReadRepository for InMemoryAuthors {
    async fn find_by_id(&self, id: &EntityId) -> DomainResult<Option<Author>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|author| author.id == *id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[EntityId]) -> DomainResult<Vec<Author>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|author| ids.contains(&author.id))
            .cloned()
            .collect())
    }

    async fn list(&self, limit: i64, skip: i64) -> DomainResult<Vec<Author>> {
        Ok(page(&self.rows.lock().unwrap(), limit, skip))
    }

    async fn search_by_name(&self, query: &str) -> DomainResult<Vec<Author>> {
        let needle = query.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|author| author.name.as_str().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SlugIndex for InMemoryAuthors {
    async fn slug_in_use(&self, slug: &Slug, exclude: Option<&EntityId>) -> DomainResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|author| author.slug == *slug && exclude != Some(&author.id)))
    }
}

/* ------------------------------- Categories ------------------------------- */

#[derive(Default)]
pub struct InMemoryCategories {
    rows: Mutex<Vec<Category>>,
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCategories {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let category = Category {
            id: category.id,
            name: category.name,
            slug: category.slug,
        };
        self.rows.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut rows = self.rows.lock().unwrap();
        let category = rows
            .iter_mut()
            .find(|category| category.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(slug) = update.slug {
            category.slug = slug;
        }
        Ok(category.clone())
    }

    async fn delete(&self, id: &EntityId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|category| category.id != *id);
        if rows.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategories {
    async fn find_by_id(&self, id: &EntityId) -> DomainResult<Option<Category>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|category| category.id == *id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[EntityId]) -> DomainResult<Vec<Category>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|category| ids.contains(&category.id))
            .cloned()
            .collect())
    }

    async fn list(&self, limit: i64, skip: i64) -> DomainResult<Vec<Category>> {
        Ok(page(&self.rows.lock().unwrap(), limit, skip))
    }

    async fn search_by_name(&self, query: &str) -> DomainResult<Vec<Category>> {
        let needle = query.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|category| category.name.as_str().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SlugIndex for InMemoryCategories {
    async fn slug_in_use(&self, slug: &Slug, exclude: Option<&EntityId>) -> DomainResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|category| category.slug == *slug && exclude != Some(&category.id)))
    }
}

/* --------------------------------- Quotes --------------------------------- */

#[derive(Default)]
pub struct InMemoryQuotes {
    rows: Mutex<Vec<Quote>>,
}

#[async_trait]
impl QuoteWriteRepository for InMemoryQuotes {
    async fn insert(&self, quote: NewQuote) -> DomainResult<Quote> {
        let quote = Quote {
            id: quote.id,
            quote: quote.quote,
            author_id: quote.author_id,
            category_ids: quote.category_ids,
            keywords: quote.keywords,
            created_at: quote.created_at,
            updated_at: quote.updated_at,
        };
        self.rows.lock().unwrap().push(quote.clone());
        Ok(quote)
    }

    async fn update(&self, update: QuoteUpdate) -> DomainResult<Quote> {
        let mut rows = self.rows.lock().unwrap();
        let quote = rows
            .iter_mut()
            .find(|quote| quote.id == update.id)
            .ok_or_else(|| DomainError::NotFound("quote not found".into()))?;

        if let Some(text) = update.quote {
            quote.quote = text;
        }
        if let Some(author_id) = update.author_id {
            quote.author_id = author_id;
        }
        if let Some(category_ids) = update.category_ids {
            quote.category_ids = category_ids;
        }
        if let Some(keywords) = update.keywords {
            quote.keywords = keywords;
        }
        quote.updated_at = update.updated_at;
        Ok(quote.clone())
    }

    async fn delete(&self, id: &EntityId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|quote| quote.id != *id);
        if rows.len() == before {
            return Err(DomainError::NotFound("quote not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl QuoteReadRepository for InMemoryQuotes {
    async fn find_by_id(&self, id: &EntityId) -> DomainResult<Option<Quote>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|quote| quote.id == *id)
            .cloned())
    }

    async fn list(&self, limit: i64, skip: i64) -> DomainResult<Vec<Quote>> {
        Ok(page(&self.rows.lock().unwrap(), limit, skip))
    }

    async fn search_text(&self, query: &str, limit: i64, skip: i64) -> DomainResult<Vec<Quote>> {
        let needle = query.to_lowercase();
        let matches: Vec<Quote> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|quote| quote.quote.as_str().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(page(&matches, limit, skip))
    }

    async fn random(&self, limit: i64) -> DomainResult<Vec<Quote>> {
        // Deterministic "sample": good enough for assertions on shape/count.
        Ok(page(&self.rows.lock().unwrap(), limit, 0))
    }
}
