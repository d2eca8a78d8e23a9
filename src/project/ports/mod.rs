//! Port contracts for project lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by project services.

pub mod repository;
mod unit_of_work;

pub use repository::{
    DaoRevocationRepository, KeyContactRepository, NoteRepository, ProjectRepository,
    ProjectRepositoryError, ProjectRepositoryResult, ProjectStore, TaskDataRepository,
};
pub use unit_of_work::ProjectUnitOfWork;
