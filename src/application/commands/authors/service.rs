// src/application/commands/authors/service.rs
use std::sync::Arc;

use crate::{
    application::{dto::HrefBuilder, ports::time::Clock},
    domain::{
        author::{AuthorReadRepository, AuthorWriteRepository},
        slug::UniqueSlugService,
    },
};

pub struct AuthorCommandService {
    pub(super) write_repo: Arc<dyn AuthorWriteRepository>,
    pub(super) read_repo: Arc<dyn AuthorReadRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) hrefs: Arc<HrefBuilder>,
}

impl AuthorCommandService {
    pub fn new(
        write_repo: Arc<dyn AuthorWriteRepository>,
        read_repo: Arc<dyn AuthorReadRepository>,
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
