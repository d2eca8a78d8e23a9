//! Handover assignment details supplied when a project becomes active.

use super::{ParseProjectValueError, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sharepoint folder recorded against a project at handover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharepointLink {
    /// The school or academy folder.
    Establishment,
    /// The incoming trust folder.
    IncomingTrust,
    /// The outgoing trust folder; transfers only.
    OutgoingTrust,
}

impl fmt::Display for SharepointLink {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Establishment => "school or academy",
            Self::IncomingTrust => "incoming trust",
            Self::OutgoingTrust => "outgoing trust",
        })
    }
}

/// Team that owns a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectTeam {
    /// Regional casework services, who pick up unassigned projects.
    RegionalCaseworkerServices,
    /// London regional delivery team.
    London,
    /// South East regional delivery team.
    SouthEast,
    /// South West regional delivery team.
    SouthWest,
    /// North West regional delivery team.
    NorthWest,
    /// North East regional delivery team.
    NorthEast,
    /// East Midlands regional delivery team.
    EastMidlands,
    /// West Midlands regional delivery team.
    WestMidlands,
    /// East of England regional delivery team.
    EastOfEngland,
    /// Yorkshire and the Humber regional delivery team.
    YorkshireAndTheHumber,
}

impl ProjectTeam {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RegionalCaseworkerServices => "regional_casework_services",
            Self::London => "london",
            Self::SouthEast => "south_east",
            Self::SouthWest => "south_west",
            Self::NorthWest => "north_west",
            Self::NorthEast => "north_east",
            Self::EastMidlands => "east_midlands",
            Self::WestMidlands => "west_midlands",
            Self::EastOfEngland => "east_of_england",
            Self::YorkshireAndTheHumber => "yorkshire_and_the_humber",
        }
    }
}

impl TryFrom<&str> for ProjectTeam {
    type Error = ParseProjectValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "regional_casework_services" => Ok(Self::RegionalCaseworkerServices),
            "london" => Ok(Self::London),
            "south_east" => Ok(Self::SouthEast),
            "south_west" => Ok(Self::SouthWest),
            "north_west" => Ok(Self::NorthWest),
            "north_east" => Ok(Self::NorthEast),
            "east_midlands" => Ok(Self::EastMidlands),
            "west_midlands" => Ok(Self::WestMidlands),
            "east_of_england" => Ok(Self::EastOfEngland),
            "yorkshire_and_the_humber" => Ok(Self::YorkshireAndTheHumber),
            _ => Err(ParseProjectValueError::new("project team", value)),
        }
    }
}

/// Details captured when an inactive project is handed over.
///
/// Validation against the project type happens in
/// [`Project::assign_on_handover`](super::Project::assign_on_handover).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoverAssignment {
    pub(super) user_id: UserId,
    pub(super) user_team: Option<ProjectTeam>,
    pub(super) establishment_sharepoint_link: String,
    pub(super) incoming_trust_sharepoint_link: String,
    pub(super) outgoing_trust_sharepoint_link: Option<String>,
    pub(super) two_requires_improvement: Option<bool>,
    pub(super) assign_to_caseworker_team: bool,
    pub(super) handover_comments: Option<String>,
}

impl HandoverAssignment {
    /// Creates an assignment to `user_id` with the two sharepoint links every
    /// project needs.
    #[must_use]
    pub fn new(
        user_id: UserId,
        establishment_sharepoint_link: impl Into<String>,
        incoming_trust_sharepoint_link: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            user_team: None,
            establishment_sharepoint_link: establishment_sharepoint_link.into(),
            incoming_trust_sharepoint_link: incoming_trust_sharepoint_link.into(),
            outgoing_trust_sharepoint_link: None,
            two_requires_improvement: None,
            assign_to_caseworker_team: false,
            handover_comments: None,
        }
    }

    /// Sets the outgoing trust sharepoint link; required for transfers.
    #[must_use]
    pub fn with_outgoing_trust_sharepoint_link(mut self, link: impl Into<String>) -> Self {
        self.outgoing_trust_sharepoint_link = Some(link.into());
        self
    }

    /// Sets the team of the assigned user.
    #[must_use]
    pub const fn with_user_team(mut self, team: ProjectTeam) -> Self {
        self.user_team = Some(team);
        self
    }

    /// Records whether the school has two "requires improvement" judgements.
    #[must_use]
    pub const fn with_two_requires_improvement(mut self, value: bool) -> Self {
        self.two_requires_improvement = Some(value);
        self
    }

    /// Hands the project to regional casework services instead of the user,
    /// optionally leaving comments for the caseworker team.
    #[must_use]
    pub fn to_caseworker_team(mut self, handover_comments: Option<String>) -> Self {
        self.assign_to_caseworker_team = true;
        self.handover_comments = handover_comments;
        self
    }

    /// Returns the user performing the handover.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns `true` when the project goes to the caseworker team.
    #[must_use]
    pub const fn assigns_to_caseworker_team(&self) -> bool {
        self.assign_to_caseworker_team
    }

    /// Returns the handover comments when they are non-blank and the project
    /// goes to the caseworker team.
    #[must_use]
    pub fn caseworker_comments(&self) -> Option<&str> {
        if !self.assign_to_caseworker_team {
            return None;
        }
        self.handover_comments
            .as_deref()
            .filter(|comments| !comments.trim().is_empty())
    }
}
