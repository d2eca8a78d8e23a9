//! Error types for project domain validation and parsing.

use super::{DaoRevokedReason, ProjectEvent, ProjectId, ProjectState, ProjectType, SharepointLink};
use thiserror::Error;

/// Errors returned while validating project commands and transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The lifecycle event is not permitted from the project's current state.
    #[error("project {project_id} cannot {event} while {from}")]
    InvalidStateTransition {
        /// Project the transition was attempted on.
        project_id: ProjectId,
        /// State the project was in.
        from: ProjectState,
        /// Rejected lifecycle event.
        event: ProjectEvent,
    },

    /// A task record of one shape was supplied for a project of the other.
    #[error("project {project_id} is a {expected} project but task data is for a {found} project")]
    TaskDataTypeMismatch {
        /// Project owning the task record.
        project_id: ProjectId,
        /// Shape required by the project type.
        expected: ProjectType,
        /// Shape actually supplied or stored.
        found: ProjectType,
    },

    /// A sharepoint link required at handover was missing or blank.
    #[error("the {0} sharepoint link is required")]
    MissingSharepointLink(SharepointLink),

    /// A DAO revocation was requested without any reasons.
    #[error("at least one revocation reason is required")]
    EmptyRevocationReasons,

    /// A DAO revocation reason was supplied without any explanation.
    #[error("a note is required for revocation reason {0}")]
    BlankRevocationNote(DaoRevokedReason),

    /// The decision maker's name was blank.
    #[error("the decision maker's name is required")]
    BlankDecisionMakerName,

    /// A note body was empty after trimming.
    #[error("note body must not be empty")]
    BlankNoteBody,
}

/// Error returned while parsing a stored project value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseProjectValueError {
    /// Kind of value being parsed.
    pub kind: &'static str,
    /// Rejected input.
    pub value: String,
}

impl ParseProjectValueError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
