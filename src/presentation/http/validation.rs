// src/presentation/http/validation.rs
//
// Request-schema checks run before any service is invoked. Failures collect
// into the structured 400 body, one entry per offending field.
use super::controllers::authors::{CreateAuthorRequest, UpdateAuthorRequest};
use super::controllers::categories::{CreateCategoryRequest, UpdateCategoryRequest};
use super::controllers::quotes::{CreateQuoteRequest, UpdateQuoteRequest};
use super::error::{FieldError, HttpError};

const BODY: &str = "body";
const PARAMS: &str = "params";

struct Checker {
    location: &'static str,
    errors: Vec<FieldError>,
}

impl Checker {
    fn new(location: &'static str) -> Self {
        Self {
            location,
            errors: Vec::new(),
        }
    }

    fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .push(FieldError::new(self.location, field, message));
    }

    fn finish(self) -> Result<(), HttpError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(HttpError::validation(self.errors))
        }
    }
}

fn is_author_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '-' | '.' | '_')
}

fn is_category_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || matches!(c, '-' | '.' | '\'' | '&')
}

fn check_name(checker: &mut Checker, value: &str, allowed: fn(char) -> bool) {
    let trimmed = value.trim();
    if trimmed.chars().count() < 2 {
        checker.fail("name", "name must be at least 2 characters long");
    } else if !trimmed.chars().all(allowed) {
        checker.fail("name", "name contains unsupported characters");
    }
}

fn check_slug(checker: &mut Checker, value: &str) {
    let valid = value.len() >= 2
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if !valid {
        checker.fail(
            "slug",
            "slug must be at least 2 lowercase letters, digits or hyphens",
        );
    }
}

fn check_uri(checker: &mut Checker, field: &str, value: &str) {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        checker.fail(field, "must be a valid URI");
    }
}

fn is_object_id(value: &str) -> bool {
    value.len() == 24 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

fn check_quote(checker: &mut Checker, value: &str) {
    if value.trim().chars().count() < 2 {
        checker.fail("quote", "quote must be at least 2 characters long");
    }
}

pub fn create_author(payload: &CreateAuthorRequest) -> Result<(), HttpError> {
    let mut checker = Checker::new(BODY);
    match &payload.name {
        Some(name) => check_name(&mut checker, name, is_author_name_char),
        None => checker.fail("name", "name is required"),
    }
    if let Some(slug) = &payload.slug {
        check_slug(&mut checker, slug);
    }
    if let Some(image) = &payload.image {
        check_uri(&mut checker, "image", image);
    }
    checker.finish()
}

pub fn update_author(payload: &UpdateAuthorRequest) -> Result<(), HttpError> {
    let mut checker = Checker::new(BODY);
    if let Some(name) = &payload.name {
        check_name(&mut checker, name, is_author_name_char);
    }
    if let Some(slug) = &payload.slug {
        check_slug(&mut checker, slug);
    }
    if let Some(image) = &payload.image {
        check_uri(&mut checker, "image", image);
    }
    checker.finish()
}

pub fn create_category(payload: &CreateCategoryRequest) -> Result<(), HttpError> {
    let mut checker = Checker::new(BODY);
    match &payload.name {
        Some(name) => check_name(&mut checker, name, is_category_name_char),
        None => checker.fail("name", "name is required"),
    }
    if let Some(slug) = &payload.slug {
        check_slug(&mut checker, slug);
    }
    checker.finish()
}

pub fn update_category(payload: &UpdateCategoryRequest) -> Result<(), HttpError> {
    let mut checker = Checker::new(BODY);
    if let Some(name) = &payload.name {
        check_name(&mut checker, name, is_category_name_char);
    }
    if let Some(slug) = &payload.slug {
        check_slug(&mut checker, slug);
    }
    checker.finish()
}

pub fn create_quote(payload: &CreateQuoteRequest) -> Result<(), HttpError> {
    let mut checker = Checker::new(BODY);
    match &payload.quote {
        Some(quote) => check_quote(&mut checker, quote),
        None => checker.fail("quote", "quote is required"),
    }
    match &payload.author {
        Some(author) if is_object_id(author.trim()) => {}
        Some(_) => checker.fail("author", "author must be a 24-character hexadecimal id"),
        None => checker.fail("author", "author is required"),
    }
    check_category_refs(&mut checker, payload.categories.as_deref());
    checker.finish()
}

pub fn update_quote(payload: &UpdateQuoteRequest) -> Result<(), HttpError> {
    let mut checker = Checker::new(BODY);
    if let Some(quote) = &payload.quote {
        check_quote(&mut checker, quote);
    }
    if let Some(author) = &payload.author {
        if !is_object_id(author.trim()) {
            checker.fail("author", "author must be a 24-character hexadecimal id");
        }
    }
    check_category_refs(&mut checker, payload.categories.as_deref());
    checker.finish()
}

fn check_category_refs(checker: &mut Checker, categories: Option<&[String]>) {
    if let Some(ids) = categories {
        if !ids.iter().all(|id| is_object_id(id.trim())) {
            checker.fail(
                "categories",
                "categories must be 24-character hexadecimal ids",
            );
        }
    }
}

/// Path ids must look like object ids before they reach a lookup; anything
/// else is a 400, not a 404.
pub fn path_id(field: &str, value: &str) -> Result<(), HttpError> {
    let mut checker = Checker::new(PARAMS);
    if !is_object_id(value) {
        checker.fail(field, "must be a 24-character hexadecimal id");
    }
    checker.finish()
}

pub fn search_query(value: &str) -> Result<(), HttpError> {
    let mut checker = Checker::new(PARAMS);
    if value.trim().chars().count() < 3 {
        checker.fail("query", "query must be at least 3 characters long");
    }
    checker.finish()
}
