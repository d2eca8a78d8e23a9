//! `PostgreSQL` adapters for project lifecycle persistence.

mod conversion;
mod models;
mod repository;
mod schema;

pub use repository::{PostgresProjectStore, ProjectPgPool};
