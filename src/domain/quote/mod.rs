pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewQuote, Quote, QuoteUpdate};
pub use repository::{QuoteReadRepository, QuoteWriteRepository};
pub use value_objects::QuoteText;
