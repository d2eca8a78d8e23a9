//! Directive academy order revocation decisions.

use super::{
    DaoRevocationId, DaoRevocationReasonId, ParseProjectValueError, ProjectDomainError, ProjectId,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reason a directive academy order was revoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaoRevokedReason {
    /// The school is now rated good or outstanding.
    SchoolRatedGoodOrOutstanding,
    /// Safeguarding concerns have been addressed.
    SafeguardingConcernsAddressed,
    /// The school has closed or is closing.
    SchoolClosedOrClosing,
    /// Government policy changed.
    ChangeToGovernmentPolicy,
}

impl DaoRevokedReason {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SchoolRatedGoodOrOutstanding => "reason_school_rated_good_or_outstanding",
            Self::SafeguardingConcernsAddressed => "reason_safeguarding_addressed",
            Self::SchoolClosedOrClosing => "reason_school_closed",
            Self::ChangeToGovernmentPolicy => "reason_change_to_policy",
        }
    }
}

impl TryFrom<&str> for DaoRevokedReason {
    type Error = ParseProjectValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "reason_school_rated_good_or_outstanding" => Ok(Self::SchoolRatedGoodOrOutstanding),
            "reason_safeguarding_addressed" => Ok(Self::SafeguardingConcernsAddressed),
            "reason_school_closed" => Ok(Self::SchoolClosedOrClosing),
            "reason_change_to_policy" => Ok(Self::ChangeToGovernmentPolicy),
            _ => Err(ParseProjectValueError::new("revocation reason", value)),
        }
    }
}

impl fmt::Display for DaoRevokedReason {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Role of the person who made a revocation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMakerRole {
    /// A government minister.
    Minister,
    /// A director general.
    DirectorGeneral,
}

impl DecisionMakerRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minister => "minister",
            Self::DirectorGeneral => "director_general",
        }
    }
}

impl TryFrom<&str> for DecisionMakerRole {
    type Error = ParseProjectValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "minister" => Ok(Self::Minister),
            "director_general" | "director general" => Ok(Self::DirectorGeneral),
            _ => Err(ParseProjectValueError::new("decision maker role", value)),
        }
    }
}

/// A revocation decision as supplied by the decision recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaoRevocationDecision {
    decision_maker_role: DecisionMakerRole,
    decision_makers_name: String,
    date_of_decision: NaiveDate,
    reason_notes: BTreeMap<DaoRevokedReason, String>,
}

impl DaoRevocationDecision {
    /// Creates a decision with no reasons yet.
    #[must_use]
    pub fn new(
        decision_maker_role: DecisionMakerRole,
        decision_makers_name: impl Into<String>,
        date_of_decision: NaiveDate,
    ) -> Self {
        Self {
            decision_maker_role,
            decision_makers_name: decision_makers_name.into(),
            date_of_decision,
            reason_notes: BTreeMap::new(),
        }
    }

    /// Adds a reason and its explanatory note, replacing any earlier note for
    /// the same reason.
    #[must_use]
    pub fn with_reason(mut self, reason: DaoRevokedReason, note: impl Into<String>) -> Self {
        self.reason_notes.insert(reason, note.into());
        self
    }

    /// Replaces all reasons.
    #[must_use]
    pub fn with_reasons(mut self, reason_notes: BTreeMap<DaoRevokedReason, String>) -> Self {
        self.reason_notes = reason_notes;
        self
    }

    /// Returns the decision maker's role.
    #[must_use]
    pub const fn decision_maker_role(&self) -> DecisionMakerRole {
        self.decision_maker_role
    }

    /// Returns the decision maker's name.
    #[must_use]
    pub fn decision_makers_name(&self) -> &str {
        &self.decision_makers_name
    }

    /// Returns the decision date.
    #[must_use]
    pub const fn date_of_decision(&self) -> NaiveDate {
        self.date_of_decision
    }

    /// Returns the reasons with their notes, in reason order.
    #[must_use]
    pub const fn reason_notes(&self) -> &BTreeMap<DaoRevokedReason, String> {
        &self.reason_notes
    }

    /// Checks the decision can be recorded.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyRevocationReasons`] when no reason
    /// was given, [`ProjectDomainError::BlankRevocationNote`] when a reason has
    /// no explanation, or [`ProjectDomainError::BlankDecisionMakerName`].
    pub fn validate(&self) -> Result<(), ProjectDomainError> {
        if self.reason_notes.is_empty() {
            return Err(ProjectDomainError::EmptyRevocationReasons);
        }
        if let Some((reason, _)) = self
            .reason_notes
            .iter()
            .find(|(_, note)| note.trim().is_empty())
        {
            return Err(ProjectDomainError::BlankRevocationNote(*reason));
        }
        if self.decision_makers_name.trim().is_empty() {
            return Err(ProjectDomainError::BlankDecisionMakerName);
        }
        Ok(())
    }
}

/// One reason row of a recorded revocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaoRevocationReason {
    /// Reason row identifier.
    pub id: DaoRevocationReasonId,
    /// Owning revocation.
    pub dao_revocation_id: DaoRevocationId,
    /// The reason.
    pub reason_type: DaoRevokedReason,
}

/// Recorded revocation of a project's directive academy order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaoRevocation {
    id: DaoRevocationId,
    project_id: ProjectId,
    decision_maker_role: DecisionMakerRole,
    decision_makers_name: String,
    date_of_decision: NaiveDate,
    reasons: Vec<DaoRevocationReason>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted revocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDaoRevocationData {
    /// Revocation identifier.
    pub id: DaoRevocationId,
    /// Revoked project.
    pub project_id: ProjectId,
    /// Decision maker's role.
    pub decision_maker_role: DecisionMakerRole,
    /// Decision maker's name.
    pub decision_makers_name: String,
    /// Decision date.
    pub date_of_decision: NaiveDate,
    /// Reason rows.
    pub reasons: Vec<DaoRevocationReason>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl DaoRevocation {
    /// Builds the revocation record and one reason row per reason of a
    /// validated decision.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`DaoRevocationDecision::validate`].
    pub fn record(
        project_id: ProjectId,
        decision: &DaoRevocationDecision,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        decision.validate()?;
        let id = DaoRevocationId::new();
        let reasons = decision
            .reason_notes
            .keys()
            .map(|reason| DaoRevocationReason {
                id: DaoRevocationReasonId::new(),
                dao_revocation_id: id,
                reason_type: *reason,
            })
            .collect();
        Ok(Self {
            id,
            project_id,
            decision_maker_role: decision.decision_maker_role,
            decision_makers_name: decision.decision_makers_name.trim().to_owned(),
            date_of_decision: decision.date_of_decision,
            reasons,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a revocation from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedDaoRevocationData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            decision_maker_role: data.decision_maker_role,
            decision_makers_name: data.decision_makers_name,
            date_of_decision: data.date_of_decision,
            reasons: data.reasons,
            created_at: data.created_at,
        }
    }

    /// Returns the revocation identifier.
    #[must_use]
    pub const fn id(&self) -> DaoRevocationId {
        self.id
    }

    /// Returns the revoked project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the decision maker's role.
    #[must_use]
    pub const fn decision_maker_role(&self) -> DecisionMakerRole {
        self.decision_maker_role
    }

    /// Returns the decision maker's name.
    #[must_use]
    pub fn decision_makers_name(&self) -> &str {
        &self.decision_makers_name
    }

    /// Returns the decision date.
    #[must_use]
    pub const fn date_of_decision(&self) -> NaiveDate {
        self.date_of_decision
    }

    /// Returns the reason rows.
    #[must_use]
    pub fn reasons(&self) -> &[DaoRevocationReason] {
        &self.reasons
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
