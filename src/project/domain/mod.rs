//! Domain model for academy conversion and transfer projects.
//!
//! The project aggregate owns its lifecycle state and the handover fields;
//! audit notes, key contacts and revocation records are separate entities
//! written alongside it. Nothing here touches infrastructure.

mod error;
mod handover;
mod ids;
mod key_contacts;
mod note;
mod project;
mod revocation;
mod state;

pub use error::{ParseProjectValueError, ProjectDomainError};
pub use handover::{HandoverAssignment, ProjectTeam, SharepointLink};
pub use ids::{
    ContactId, DaoRevocationId, DaoRevocationReasonId, KeyContactId, NoteId, ProjectId,
    TaskDataId, UserId,
};
pub use key_contacts::{KeyContactRole, KeyContacts, PersistedKeyContactsData};
pub use note::{Notable, NotableType, Note, PersistedNoteData};
pub use project::{NewProject, PersistedProjectData, Project, ProjectDetailsUpdate};
pub use revocation::{
    DaoRevocation, DaoRevocationDecision, DaoRevocationReason, DaoRevokedReason,
    DecisionMakerRole, PersistedDaoRevocationData,
};
pub use state::{ProjectEvent, ProjectState, ProjectType};
