//! Project lifecycle states, events and the transition table.

use super::ParseProjectValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectState {
    /// Handed over to the service but not yet assigned.
    Inactive,
    /// Assigned and being worked.
    Active,
    /// All tasks done and the significant date confirmed.
    Completed,
    /// The directive academy order was revoked.
    DaoRevoked,
    /// Removed from all listings.
    Deleted,
}

impl ProjectState {
    /// Every lifecycle state, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Inactive,
        Self::Active,
        Self::Completed,
        Self::DaoRevoked,
        Self::Deleted,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::DaoRevoked => "dao_revoked",
            Self::Deleted => "deleted",
        }
    }

    /// Returns the state reached by applying `event`, or `None` when the
    /// event is not permitted from this state.
    #[must_use]
    pub const fn apply(self, event: ProjectEvent) -> Option<Self> {
        match (self, event) {
            (Self::Inactive, ProjectEvent::AssignOnHandover) => Some(Self::Active),
            (Self::Active, ProjectEvent::Complete) => Some(Self::Completed),
            (Self::Active, ProjectEvent::RevokeDao) => Some(Self::DaoRevoked),
            (Self::Active, ProjectEvent::Delete) => Some(Self::Deleted),
            (Self::Inactive | Self::Active, ProjectEvent::Update) => Some(self),
            _ => None,
        }
    }

    /// Returns `true` when `event` is permitted from this state.
    #[must_use]
    pub const fn permits(self, event: ProjectEvent) -> bool {
        self.apply(event).is_some()
    }

    /// Returns `true` when no lifecycle event leaves this state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::DaoRevoked | Self::Deleted)
    }
}

impl TryFrom<&str> for ProjectState {
    type Error = ParseProjectValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "inactive" => Ok(Self::Inactive),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "dao_revoked" => Ok(Self::DaoRevoked),
            "deleted" => Ok(Self::Deleted),
            _ => Err(ParseProjectValueError::new("project state", value)),
        }
    }
}

impl fmt::Display for ProjectState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Lifecycle event requested against a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectEvent {
    /// Assign an inactive project to its owning team or user.
    AssignOnHandover,
    /// Mark the project complete.
    Complete,
    /// Record a DAO revocation decision.
    RevokeDao,
    /// Delete the project.
    Delete,
    /// Change project details, the checklist or key contacts without moving
    /// the project between states.
    Update,
}

impl ProjectEvent {
    /// Returns a short human-readable description.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AssignOnHandover => "assign on handover",
            Self::Complete => "complete",
            Self::RevokeDao => "revoke the academy order",
            Self::Delete => "delete",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for ProjectEvent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Project type; fixed when the project is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    /// A school converting to an academy.
    Conversion,
    /// An academy moving between trusts.
    Transfer,
}

impl ProjectType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conversion => "conversion",
            Self::Transfer => "transfer",
        }
    }
}

impl TryFrom<&str> for ProjectType {
    type Error = ParseProjectValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "conversion" => Ok(Self::Conversion),
            "transfer" => Ok(Self::Transfer),
            _ => Err(ParseProjectValueError::new("project type", value)),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
