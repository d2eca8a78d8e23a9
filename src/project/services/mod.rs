//! Application services for project lifecycle orchestration.

mod lifecycle;
mod revocation;

pub use lifecycle::{
    AddTaskNoteRequest, CompletionOutcome, ProjectLifecycleError, ProjectLifecycleResult,
    ProjectLifecycleService,
};
pub use revocation::RecordDaoRevocationRequest;
