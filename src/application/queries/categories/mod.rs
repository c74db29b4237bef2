mod get_by_id;
mod list;
mod search;
mod service;

pub use get_by_id::GetCategoryByIdQuery;
pub use list::ListCategoriesQuery;
pub use search::SearchCategoriesQuery;
pub use service::CategoryQueryService;
