// src/domain/id.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Identifier shared by every catalog record: 24 lowercase hex characters,
/// the same shape the storage layer's native object ids used to have.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId(String);

impl EntityId {
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value: String = value.into();
        if value.len() != 24 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DomainError::Validation(
                "id must be a 24-character hexadecimal string".into(),
            ));
        }
        Ok(Self(value.to_ascii_lowercase()))
    }

    /// Mint a fresh id: 4 timestamp bytes followed by 8 random bytes, so ids
    /// sort roughly by creation time.
    pub fn generate(now: DateTime<Utc>) -> Self {
        let secs = now.timestamp() as u32;
        let tail = Uuid::new_v4().simple().to_string();
        Self(format!("{secs:08x}{}", &tail[..16]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.0
    }
}
