//! Task groups shared by the conversion and transfer checklists.

use super::{Requirements, TaskStatus};
use crate::project::domain::ParseProjectValueError;
use serde::{Deserialize, Serialize};

/// Handover with the regional delivery officer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandoverTask {
    /// The handover meeting did not take place.
    pub not_applicable: bool,
    /// Project documents reviewed.
    pub review: bool,
    /// Handover notes made.
    pub notes: bool,
    /// Handover meeting attended.
    pub meeting: bool,
}

impl HandoverTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.review)
                .step(self.notes)
                .step(self.meeting),
        )
    }
}

/// Articles of association.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticlesOfAssociationTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed by the trust.
    pub signed: bool,
    /// Saved in the project folder.
    pub saved: bool,
    /// Sent to the solicitors.
    pub sent: bool,
}

impl ArticlesOfAssociationTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.received)
                .step(self.cleared)
                .step(self.signed)
                .step(self.saved)
                .step(self.sent),
        )
    }
}

/// Deed of variation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeedOfVariationTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed by the trust.
    pub signed: bool,
    /// Saved in the project folder.
    pub saved: bool,
    /// Sent to the Secretary of State.
    pub sent: bool,
    /// Signed by the Secretary of State.
    pub signed_secretary_state: bool,
}

impl DeedOfVariationTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.received)
                .step(self.cleared)
                .step(self.signed)
                .step(self.saved)
                .step(self.sent)
                .step(self.signed_secretary_state),
        )
    }
}

/// Commercial transfer agreement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercialTransferAgreementTask {
    /// Agreement agreed between the parties.
    pub agreed: bool,
    /// Agreement signed.
    pub signed: bool,
    /// Commercial questions received.
    pub questions_received: bool,
    /// Commercial questions checked.
    pub questions_checked: bool,
    /// Confirmation saved.
    pub saved: bool,
}

impl CommercialTransferAgreementTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            false,
            Requirements::new()
                .step(self.agreed)
                .step(self.signed)
                .step(self.questions_received)
                .step(self.questions_checked)
                .step(self.saved),
        )
    }
}

/// Kind of sponsored support grant paid to the trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsoredSupportGrantType {
    /// Fast track grant.
    FastTrack,
    /// Intermediate grant.
    Intermediate,
    /// Full sponsored grant.
    #[serde(rename = "sponsored")]
    FullSponsored,
}

impl SponsoredSupportGrantType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FastTrack => "fast_track",
            Self::Intermediate => "intermediate",
            Self::FullSponsored => "sponsored",
        }
    }
}

impl TryFrom<&str> for SponsoredSupportGrantType {
    type Error = ParseProjectValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "fast_track" => Ok(Self::FastTrack),
            "intermediate" => Ok(Self::Intermediate),
            "sponsored" => Ok(Self::FullSponsored),
            _ => Err(ParseProjectValueError::new("sponsored support grant type", value)),
        }
    }
}
