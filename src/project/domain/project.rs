//! Project aggregate root.

use super::{
    ContactId, HandoverAssignment, ProjectDomainError, ProjectEvent, ProjectId, ProjectState,
    ProjectTeam, ProjectType, SharepointLink, TaskDataId, UserId,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Parameters for a newly handed-over project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewProject {
    project_type: ProjectType,
    significant_date: Option<NaiveDate>,
    significant_date_provisional: bool,
    form_a_mat: bool,
    directive_academy_order: bool,
}

impl NewProject {
    /// Starts a project of the given type with a provisional, unset date.
    #[must_use]
    pub const fn new(project_type: ProjectType) -> Self {
        Self {
            project_type,
            significant_date: None,
            significant_date_provisional: true,
            form_a_mat: false,
            directive_academy_order: false,
        }
    }

    /// Sets the significant date and whether it is still provisional.
    #[must_use]
    pub const fn with_significant_date(mut self, date: NaiveDate, provisional: bool) -> Self {
        self.significant_date = Some(date);
        self.significant_date_provisional = provisional;
        self
    }

    /// Marks the project as moving into a newly formed multi-academy trust.
    #[must_use]
    pub const fn forming_a_mat(mut self) -> Self {
        self.form_a_mat = true;
        self
    }

    /// Marks the project as driven by a directive academy order.
    #[must_use]
    pub const fn with_directive_academy_order(mut self) -> Self {
        self.directive_academy_order = true;
        self
    }

    /// Returns the project type.
    #[must_use]
    pub const fn project_type(&self) -> ProjectType {
        self.project_type
    }
}

/// Changes to project-level fields that feed the checklist.
///
/// `None` leaves a field untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectDetailsUpdate {
    /// New significant date and provisional flag.
    pub significant_date: Option<(Option<NaiveDate>, bool)>,
    /// Whether all academy order conditions have been met.
    pub all_conditions_met: Option<bool>,
    /// Main contact for the project; `Some(None)` clears it.
    pub main_contact_id: Option<Option<ContactId>>,
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    project_type: ProjectType,
    state: ProjectState,
    significant_date: Option<NaiveDate>,
    significant_date_provisional: bool,
    tasks_data_id: TaskDataId,
    form_a_mat: bool,
    directive_academy_order: bool,
    all_conditions_met: Option<bool>,
    main_contact_id: Option<ContactId>,
    two_requires_improvement: Option<bool>,
    team: Option<ProjectTeam>,
    assigned_to: Option<UserId>,
    assigned_at: Option<DateTime<Utc>>,
    establishment_sharepoint_link: Option<String>,
    incoming_trust_sharepoint_link: Option<String>,
    outgoing_trust_sharepoint_link: Option<String>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: u64,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted project type.
    pub project_type: ProjectType,
    /// Persisted lifecycle state.
    pub state: ProjectState,
    /// Persisted significant date.
    pub significant_date: Option<NaiveDate>,
    /// Whether the significant date is provisional.
    pub significant_date_provisional: bool,
    /// Identifier of the project's task record.
    pub tasks_data_id: TaskDataId,
    /// Whether the project forms a new multi-academy trust.
    pub form_a_mat: bool,
    /// Whether a directive academy order applies.
    pub directive_academy_order: bool,
    /// Whether all academy order conditions have been met.
    pub all_conditions_met: Option<bool>,
    /// Main contact, if chosen.
    pub main_contact_id: Option<ContactId>,
    /// Two "requires improvement" judgements, if recorded.
    pub two_requires_improvement: Option<bool>,
    /// Owning team.
    pub team: Option<ProjectTeam>,
    /// Assigned user.
    pub assigned_to: Option<UserId>,
    /// Assignment timestamp.
    pub assigned_at: Option<DateTime<Utc>>,
    /// School or academy sharepoint link.
    pub establishment_sharepoint_link: Option<String>,
    /// Incoming trust sharepoint link.
    pub incoming_trust_sharepoint_link: Option<String>,
    /// Outgoing trust sharepoint link.
    pub outgoing_trust_sharepoint_link: Option<String>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Number of committed writes to the project and its records.
    pub version: u64,
}

impl Project {
    /// Creates an inactive project awaiting handover.
    #[must_use]
    pub fn new(params: NewProject, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ProjectId::new(),
            project_type: params.project_type,
            state: ProjectState::Inactive,
            significant_date: params.significant_date,
            significant_date_provisional: params.significant_date_provisional,
            tasks_data_id: TaskDataId::new(),
            form_a_mat: params.form_a_mat,
            directive_academy_order: params.directive_academy_order,
            all_conditions_met: None,
            main_contact_id: None,
            two_requires_improvement: None,
            team: None,
            assigned_to: None,
            assigned_at: None,
            establishment_sharepoint_link: None,
            incoming_trust_sharepoint_link: None,
            outgoing_trust_sharepoint_link: None,
            completed_at: None,
            created_at: timestamp,
            updated_at: timestamp,
            version: 0,
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            project_type: data.project_type,
            state: data.state,
            significant_date: data.significant_date,
            significant_date_provisional: data.significant_date_provisional,
            tasks_data_id: data.tasks_data_id,
            form_a_mat: data.form_a_mat,
            directive_academy_order: data.directive_academy_order,
            all_conditions_met: data.all_conditions_met,
            main_contact_id: data.main_contact_id,
            two_requires_improvement: data.two_requires_improvement,
            team: data.team,
            assigned_to: data.assigned_to,
            assigned_at: data.assigned_at,
            establishment_sharepoint_link: data.establishment_sharepoint_link,
            incoming_trust_sharepoint_link: data.incoming_trust_sharepoint_link,
            outgoing_trust_sharepoint_link: data.outgoing_trust_sharepoint_link,
            completed_at: data.completed_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
            version: data.version,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project type.
    #[must_use]
    pub const fn project_type(&self) -> ProjectType {
        self.project_type
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ProjectState {
        self.state
    }

    /// Returns the significant (conversion or transfer) date.
    #[must_use]
    pub const fn significant_date(&self) -> Option<NaiveDate> {
        self.significant_date
    }

    /// Returns `true` while the significant date is unconfirmed.
    #[must_use]
    pub const fn significant_date_provisional(&self) -> bool {
        self.significant_date_provisional
    }

    /// Returns the task record identifier.
    #[must_use]
    pub const fn tasks_data_id(&self) -> TaskDataId {
        self.tasks_data_id
    }

    /// Returns the shape of task record this project owns. Always equal to
    /// the project type.
    #[must_use]
    pub const fn tasks_data_type(&self) -> ProjectType {
        self.project_type
    }

    /// Returns `true` when the project forms a new multi-academy trust.
    #[must_use]
    pub const fn form_a_mat(&self) -> bool {
        self.form_a_mat
    }

    /// Returns `true` when a directive academy order applies.
    #[must_use]
    pub const fn directive_academy_order(&self) -> bool {
        self.directive_academy_order
    }

    /// Returns whether all academy order conditions have been met.
    #[must_use]
    pub const fn all_conditions_met(&self) -> Option<bool> {
        self.all_conditions_met
    }

    /// Returns the main contact.
    #[must_use]
    pub const fn main_contact_id(&self) -> Option<ContactId> {
        self.main_contact_id
    }

    /// Returns the "two requires improvement" answer captured at handover.
    #[must_use]
    pub const fn two_requires_improvement(&self) -> Option<bool> {
        self.two_requires_improvement
    }

    /// Returns the owning team.
    #[must_use]
    pub const fn team(&self) -> Option<ProjectTeam> {
        self.team
    }

    /// Returns the assigned user.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Returns when the project was assigned.
    #[must_use]
    pub const fn assigned_at(&self) -> Option<DateTime<Utc>> {
        self.assigned_at
    }

    /// Returns the sharepoint link recorded for `link`.
    #[must_use]
    pub fn sharepoint_link(&self, link: SharepointLink) -> Option<&str> {
        match link {
            SharepointLink::Establishment => self.establishment_sharepoint_link.as_deref(),
            SharepointLink::IncomingTrust => self.incoming_trust_sharepoint_link.as_deref(),
            SharepointLink::OutgoingTrust => self.outgoing_trust_sharepoint_link.as_deref(),
        }
    }

    /// Returns the completion timestamp.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
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

    /// Returns the write counter guarding concurrent commits.
    ///
    /// Every commit touching the project, its checklist record or its key
    /// contacts advances the counter by one.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    pub(crate) const fn advance_version(&mut self) {
        self.version = self.version.saturating_add(1);
    }

    /// Activates an inactive project and records the handover details.
    ///
    /// Handing over to the caseworker team leaves the project unassigned and
    /// owned by regional casework services; otherwise the handing-over user
    /// takes the project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidStateTransition`] unless the
    /// project is inactive, or [`ProjectDomainError::MissingSharepointLink`]
    /// when a link the project type requires is blank.
    pub fn assign_on_handover(
        &mut self,
        assignment: &HandoverAssignment,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        self.ensure_permits(ProjectEvent::AssignOnHandover)?;

        let establishment = required_link(
            &assignment.establishment_sharepoint_link,
            SharepointLink::Establishment,
        )?;
        let incoming_trust = required_link(
            &assignment.incoming_trust_sharepoint_link,
            SharepointLink::IncomingTrust,
        )?;
        let outgoing_trust = match self.project_type {
            ProjectType::Transfer => Some(required_link(
                assignment
                    .outgoing_trust_sharepoint_link
                    .as_deref()
                    .unwrap_or_default(),
                SharepointLink::OutgoingTrust,
            )?),
            ProjectType::Conversion => None,
        };

        let timestamp = clock.utc();
        self.establishment_sharepoint_link = Some(establishment);
        self.incoming_trust_sharepoint_link = Some(incoming_trust);
        self.outgoing_trust_sharepoint_link = outgoing_trust;
        if self.project_type == ProjectType::Conversion {
            self.two_requires_improvement = assignment.two_requires_improvement;
        }
        if assignment.assign_to_caseworker_team {
            self.team = Some(ProjectTeam::RegionalCaseworkerServices);
            self.assigned_to = None;
            self.assigned_at = None;
        } else {
            self.team = assignment.user_team;
            self.assigned_to = Some(assignment.user_id);
            self.assigned_at = Some(timestamp);
        }
        self.transition(ProjectEvent::AssignOnHandover, timestamp)
    }

    /// Marks the project completed.
    ///
    /// Checklist validation is the caller's responsibility; this only
    /// enforces the lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidStateTransition`] unless the
    /// project is active.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), ProjectDomainError> {
        self.ensure_permits(ProjectEvent::Complete)?;
        let timestamp = clock.utc();
        self.completed_at = Some(timestamp);
        self.transition(ProjectEvent::Complete, timestamp)
    }

    /// Marks the project as having its academy order revoked.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidStateTransition`] unless the
    /// project is active.
    pub fn revoke_dao(&mut self, clock: &impl Clock) -> Result<(), ProjectDomainError> {
        self.transition(ProjectEvent::RevokeDao, clock.utc())
    }

    /// Marks the project deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidStateTransition`] unless the
    /// project is active.
    pub fn delete(&mut self, clock: &impl Clock) -> Result<(), ProjectDomainError> {
        self.transition(ProjectEvent::Delete, clock.utc())
    }

    /// Applies project-level field changes.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidStateTransition`] when the project
    /// is in a terminal state.
    pub fn update_details(
        &mut self,
        update: ProjectDetailsUpdate,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        self.ensure_permits(ProjectEvent::Update)?;
        if let Some((date, provisional)) = update.significant_date {
            self.significant_date = date;
            self.significant_date_provisional = provisional;
        }
        if let Some(met) = update.all_conditions_met {
            self.all_conditions_met = Some(met);
        }
        if let Some(contact) = update.main_contact_id {
            self.main_contact_id = contact;
        }
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Checks that `event` is permitted from the current state without
    /// applying it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidStateTransition`] when the event
    /// is not permitted.
    pub const fn ensure_permits(&self, event: ProjectEvent) -> Result<(), ProjectDomainError> {
        if self.state.permits(event) {
            Ok(())
        } else {
            Err(self.rejected(event))
        }
    }

    fn transition(
        &mut self,
        event: ProjectEvent,
        timestamp: DateTime<Utc>,
    ) -> Result<(), ProjectDomainError> {
        let next = self.state.apply(event).ok_or_else(|| self.rejected(event))?;
        self.state = next;
        self.updated_at = timestamp;
        Ok(())
    }

    const fn rejected(&self, event: ProjectEvent) -> ProjectDomainError {
        ProjectDomainError::InvalidStateTransition {
            project_id: self.id,
            from: self.state,
            event,
        }
    }
}

fn required_link(value: &str, link: SharepointLink) -> Result<String, ProjectDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProjectDomainError::MissingSharepointLink(link));
    }
    Ok(trimmed.to_owned())
}
