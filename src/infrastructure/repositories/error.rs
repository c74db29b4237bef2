use crate::domain::errors::DomainError;

const CNT_AUTHOR_SLUG: &str = "authors_slug_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_QUOTE_AUTHOR: &str = "quotes_author_id_fkey";
const CNT_QUOTE_CATEGORY: &str = "quote_categories_category_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_AUTHOR_SLUG | CNT_CATEGORY_SLUG => {
                        DomainError::Conflict("slug already exists".into())
                    }
                    CNT_QUOTE_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_QUOTE_CATEGORY => DomainError::NotFound("category not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Escape LIKE metacharacters so a user query only ever matches literally.
pub fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escapes_like_metacharacters() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("pal"), "pal");
    }
}
