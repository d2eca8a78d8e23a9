//! Key contacts nominated for a project.

use super::{ContactId, KeyContactId, ParseProjectValueError, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named role a key contact fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyContactRole {
    /// Headteacher of the school or academy.
    Headteacher,
    /// Chair of the governing body.
    ChairOfGovernors,
    /// Chief executive of the incoming trust.
    IncomingTrustCeo,
    /// Chief executive of the outgoing trust.
    OutgoingTrustCeo,
}

impl KeyContactRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Headteacher => "headteacher",
            Self::ChairOfGovernors => "chair_of_governors",
            Self::IncomingTrustCeo => "incoming_trust_ceo",
            Self::OutgoingTrustCeo => "outgoing_trust_ceo",
        }
    }
}

impl TryFrom<&str> for KeyContactRole {
    type Error = ParseProjectValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "headteacher" => Ok(Self::Headteacher),
            "chair_of_governors" => Ok(Self::ChairOfGovernors),
            "incoming_trust_ceo" => Ok(Self::IncomingTrustCeo),
            "outgoing_trust_ceo" => Ok(Self::OutgoingTrustCeo),
            _ => Err(ParseProjectValueError::new("key contact role", value)),
        }
    }
}

impl fmt::Display for KeyContactRole {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Key contact record owned by one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyContacts {
    id: KeyContactId,
    project_id: ProjectId,
    headteacher_id: Option<ContactId>,
    chair_of_governors_id: Option<ContactId>,
    incoming_trust_ceo_id: Option<ContactId>,
    outgoing_trust_ceo_id: Option<ContactId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing persisted key contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistedKeyContactsData {
    /// Record identifier.
    pub id: KeyContactId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Headteacher contact.
    pub headteacher_id: Option<ContactId>,
    /// Chair of governors contact.
    pub chair_of_governors_id: Option<ContactId>,
    /// Incoming trust CEO contact.
    pub incoming_trust_ceo_id: Option<ContactId>,
    /// Outgoing trust CEO contact.
    pub outgoing_trust_ceo_id: Option<ContactId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl KeyContacts {
    /// Creates an empty key-contact record for a project.
    #[must_use]
    pub fn new(project_id: ProjectId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: KeyContactId::new(),
            project_id,
            headteacher_id: None,
            chair_of_governors_id: None,
            incoming_trust_ceo_id: None,
            outgoing_trust_ceo_id: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs key contacts from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedKeyContactsData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            headteacher_id: data.headteacher_id,
            chair_of_governors_id: data.chair_of_governors_id,
            incoming_trust_ceo_id: data.incoming_trust_ceo_id,
            outgoing_trust_ceo_id: data.outgoing_trust_ceo_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> KeyContactId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the contact filling `role`.
    #[must_use]
    pub const fn contact(&self, role: KeyContactRole) -> Option<ContactId> {
        match role {
            KeyContactRole::Headteacher => self.headteacher_id,
            KeyContactRole::ChairOfGovernors => self.chair_of_governors_id,
            KeyContactRole::IncomingTrustCeo => self.incoming_trust_ceo_id,
            KeyContactRole::OutgoingTrustCeo => self.outgoing_trust_ceo_id,
        }
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets or clears the contact for `role`.
    pub fn assign(&mut self, role: KeyContactRole, contact: Option<ContactId>, clock: &impl Clock) {
        let slot = match role {
            KeyContactRole::Headteacher => &mut self.headteacher_id,
            KeyContactRole::ChairOfGovernors => &mut self.chair_of_governors_id,
            KeyContactRole::IncomingTrustCeo => &mut self.incoming_trust_ceo_id,
            KeyContactRole::OutgoingTrustCeo => &mut self.outgoing_trust_ceo_id,
        };
        *slot = contact;
        self.updated_at = clock.utc();
    }
}
