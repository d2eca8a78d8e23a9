//! In-memory adapters for project lifecycle persistence.

mod store;

pub use store::InMemoryProjectStore;
