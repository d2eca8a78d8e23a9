//! Identifier newtypes for projects and the records that hang off them.
//!
//! Each identifier wraps a UUID so that a note id can never be passed where a
//! project id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the wrapped UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl AsRef<Uuid> for $name {
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "{}", self.0)
            }
        }
    };
}

uuid_identifier!(
    /// Unique identifier for a conversion or transfer project.
    ProjectId
);

uuid_identifier!(
    /// Identifier of the checklist record owned by a project.
    TaskDataId
);

uuid_identifier!(
    /// Identifier of a user, resolved by the identity layer.
    UserId
);

uuid_identifier!(
    /// Identifier of a contact held by the contacts service.
    ContactId
);

uuid_identifier!(
    /// Identifier of a project's key-contact record.
    KeyContactId
);

uuid_identifier!(
    /// Identifier of an audit note.
    NoteId
);

uuid_identifier!(
    /// Identifier of a DAO revocation record.
    DaoRevocationId
);

uuid_identifier!(
    /// Identifier of one reason row attached to a DAO revocation.
    DaoRevocationReasonId
);
