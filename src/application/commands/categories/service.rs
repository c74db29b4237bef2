// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::{dto::HrefBuilder, ports::time::Clock},
    domain::{
        category::{CategoryReadRepository, CategoryWriteRepository},
        slug::UniqueSlugService,
    },
};

pub struct CategoryCommandService {
    pub(super) write_repo: Arc<dyn CategoryWriteRepository>,
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) hrefs: Arc<HrefBuilder>,
}

impl CategoryCommandService {
    pub fn new(
        write_repo: Arc<dyn CategoryWriteRepository>,
        read_repo: Arc<dyn CategoryReadRepository>,
        slug_service: Arc<UniqueSlugService>,
        clock: Arc<dyn Clock>,
        hrefs: Arc<HrefBuilder>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            hrefs,
        }
    }
}
