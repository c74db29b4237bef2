use std::sync::Arc;

use crate::application::dto::HrefBuilder;
use crate::domain::category::CategoryReadRepository;

pub struct CategoryQueryService {
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) hrefs: Arc<HrefBuilder>,
}

impl CategoryQueryService {
    pub fn new(read_repo: Arc<dyn CategoryReadRepository>, hrefs: Arc<HrefBuilder>) -> Self {
        Self { read_repo, hrefs }
    }
}
