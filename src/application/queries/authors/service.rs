use std::sync::Arc;

use crate::application::dto::HrefBuilder;
use crate::domain::author::AuthorReadRepository;

pub struct AuthorQueryService {
    pub(super) read_repo: Arc<dyn AuthorReadRepository>,
    pub(super) hrefs: Arc<HrefBuilder>,
}

impl AuthorQueryService {
    pub fn new(read_repo: Arc<dyn AuthorReadRepository>, hrefs: Arc<HrefBuilder>) -> Self {
        Self { read_repo, hrefs }
    }
}
