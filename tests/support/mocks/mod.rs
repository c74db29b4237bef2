// tests/support/mocks/mod.rs
mod counters;
mod repos;

pub use counters::InMemorySlugCounterStore;
pub use repos::{InMemoryAuthors, InMemoryCategories, InMemoryQuotes};
