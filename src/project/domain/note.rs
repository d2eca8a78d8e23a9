//! Append-only audit notes attached to projects.

use super::{NoteId, ParseProjectValueError, ProjectDomainError, ProjectId, UserId};
use crate::project::checklist::TaskIdentifier;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of non-task record a note is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotableType {
    /// One reason row of a DAO revocation.
    DaoRevocationReason,
}

impl NotableType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DaoRevocationReason => "DaoRevocationReason",
        }
    }
}

impl TryFrom<&str> for NotableType {
    type Error = ParseProjectValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "DaoRevocationReason" => Ok(Self::DaoRevocationReason),
            _ => Err(ParseProjectValueError::new("notable type", value)),
        }
    }
}

/// Reference from a note to the record it explains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Notable {
    /// Kind of the referenced record.
    pub notable_type: NotableType,
    /// Identifier of the referenced record.
    pub notable_id: Uuid,
}

/// Audit note. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    project_id: ProjectId,
    user_id: UserId,
    body: String,
    task_identifier: Option<TaskIdentifier>,
    notable: Option<Notable>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedNoteData {
    /// Note identifier.
    pub id: NoteId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Author.
    pub user_id: UserId,
    /// Free-text body.
    pub body: String,
    /// Checklist task the note belongs to.
    pub task_identifier: Option<TaskIdentifier>,
    /// Non-task record the note explains.
    pub notable: Option<Notable>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note on a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::BlankNoteBody`] when the body is blank.
    pub fn new(
        project_id: ProjectId,
        user_id: UserId,
        body: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        let text: String = body.into();
        if text.trim().is_empty() {
            return Err(ProjectDomainError::BlankNoteBody);
        }
        Ok(Self {
            id: NoteId::new(),
            project_id,
            user_id,
            body: text,
            task_identifier: None,
            notable: None,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a note from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedNoteData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            user_id: data.user_id,
            body: data.body,
            task_identifier: data.task_identifier,
            notable: data.notable,
            created_at: data.created_at,
        }
    }

    /// Ties the note to a checklist task.
    #[must_use]
    pub const fn with_task_identifier(mut self, task_identifier: TaskIdentifier) -> Self {
        self.task_identifier = Some(task_identifier);
        self
    }

    /// Ties the note to a non-task record.
    #[must_use]
    pub const fn with_notable(mut self, notable_type: NotableType, notable_id: Uuid) -> Self {
        self.notable = Some(Notable {
            notable_type,
            notable_id,
        });
        self
    }

    /// Returns the note identifier.
    #[must_use]
    pub const fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the author.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the checklist task the note belongs to.
    #[must_use]
    pub const fn task_identifier(&self) -> Option<TaskIdentifier> {
        self.task_identifier
    }

    /// Returns the non-task record the note explains.
    #[must_use]
    pub const fn notable(&self) -> Option<Notable> {
        self.notable
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
