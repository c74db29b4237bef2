// src/application/dto/hrefs.rs
use crate::domain::id::EntityId;

/// Builds the absolute `href` links embedded in responses, rooted at the
/// configured public base URL.
#[derive(Debug, Clone)]
pub struct HrefBuilder {
    base: String,
}

impl HrefBuilder {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        let base = public_base_url.into().trim_end_matches('/').to_string();
        Self { base }
    }

    pub fn author(&self, id: &EntityId) -> String {
        format!("{}/api/authors/{id}", self.base)
    }

    pub fn category(&self, id: &EntityId) -> String {
        format!("{}/api/categories/{id}", self.base)
    }

    pub fn quote(&self, id: &EntityId) -> String {
        format!("{}/api/quotes/{id}", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_base() {
        let hrefs = HrefBuilder::new("http://localhost:3002/");
        let id = EntityId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(
            hrefs.author(&id),
            "http://localhost:3002/api/authors/507f1f77bcf86cd799439011"
        );
    }
}
