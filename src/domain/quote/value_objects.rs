use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Free-text body of a quote. Trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteText(String);

impl QuoteText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("quote cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<QuoteText> for String {
    fn from(value: QuoteText) -> Self {
        value.0
    }
}
