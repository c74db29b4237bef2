// src/presentation/http/controllers/mod.rs
pub mod authors;
pub mod categories;
pub mod quotes;

use serde::Deserialize;
use utoipa::IntoParams;

/// Offset pagination shared by every listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListParams {
    /// Page size, defaults to 10, capped at 100.
    pub limit: Option<i64>,
    /// Records to skip from the start, defaults to 0.
    pub skip: Option<i64>,
}
