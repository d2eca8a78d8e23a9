//! Service layer for project lifecycle transitions and checklist upkeep.

use crate::project::{
    checklist::{CompletionValidation, TaskIdentifier, TaskList, TaskRecord},
    domain::{
        ContactId, DaoRevocation, HandoverAssignment, KeyContactRole, KeyContacts, NewProject,
        Note, Project, ProjectDetailsUpdate, ProjectDomainError, ProjectEvent, ProjectId,
        TaskDataId, UserId,
    },
    ports::{
        DaoRevocationRepository, NoteRepository, ProjectRepositoryError, ProjectStore,
        ProjectUnitOfWork, TaskDataRepository,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for appending a note to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskNoteRequest {
    project_id: ProjectId,
    user_id: UserId,
    body: String,
    task_identifier: Option<TaskIdentifier>,
}

impl AddTaskNoteRequest {
    /// Creates a project-level note request.
    #[must_use]
    pub fn new(project_id: ProjectId, user_id: UserId, body: impl Into<String>) -> Self {
        Self {
            project_id,
            user_id,
            body: body.into(),
            task_identifier: None,
        }
    }

    /// Attaches the note to a checklist task.
    #[must_use]
    pub const fn for_task(mut self, task_identifier: TaskIdentifier) -> Self {
        self.task_identifier = Some(task_identifier);
        self
    }
}

/// Service-level errors for project lifecycle operations.
#[derive(Debug, Error)]
pub enum ProjectLifecycleError {
    /// Domain validation or a lifecycle rule rejected the command.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// The project does not exist.
    #[error("project not found: {0}")]
    NotFound(ProjectId),
    /// The project's checklist record does not exist.
    #[error("task data not found: {0}")]
    TaskDataNotFound(TaskDataId),
    /// The project has no key-contact record.
    #[error("key contacts not found for project: {0}")]
    KeyContactsNotFound(ProjectId),
}

impl ProjectLifecycleError {
    /// Returns `true` when a project, checklist record or key-contact record
    /// was missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::TaskDataNotFound(_)
                | Self::KeyContactsNotFound(_)
                | Self::Repository(
                    ProjectRepositoryError::NotFound(_)
                        | ProjectRepositoryError::TaskDataNotFound(_)
                        | ProjectRepositoryError::KeyContactsNotFound(_)
                )
        )
    }

    /// Returns `true` when the project was not in a state that permits the
    /// command, either on load or by the time the commit landed.
    #[must_use]
    pub const fn is_state_conflict(&self) -> bool {
        matches!(
            self,
            Self::Domain(ProjectDomainError::InvalidStateTransition { .. })
                | Self::Repository(ProjectRepositoryError::StateConflict { .. })
        )
    }

    /// Returns `true` when re-issuing the command against fresh state may
    /// succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Repository(err) => err.is_retryable(),
            _ => false,
        }
    }
}

/// Result type for project lifecycle service operations.
pub type ProjectLifecycleResult<T> = Result<T, ProjectLifecycleError>;

/// Result of asking for a project to be completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The project is now completed.
    Completed(Project),
    /// The checklist or significant date blocks completion; nothing changed.
    Blocked(CompletionValidation),
}

/// Project lifecycle orchestration service.
pub struct ProjectLifecycleService<S, C>
where
    S: ProjectStore,
    C: Clock + Send + Sync,
{
    pub(super) store: Arc<S>,
    pub(super) clock: Arc<C>,
}

impl<S, C> Clone for ProjectLifecycleService<S, C>
where
    S: ProjectStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, C> ProjectLifecycleService<S, C>
where
    S: ProjectStore,
    C: Clock + Send + Sync,
{
    /// Creates a new project lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates an inactive project with an untouched checklist of the
    /// matching shape and an empty key-contact record.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Repository`] when the store rejects
    /// the write.
    pub async fn create_project(&self, request: NewProject) -> ProjectLifecycleResult<Project> {
        let project = Project::new(request, &*self.clock);
        let record = TaskRecord::empty(project.project_type());
        let contacts = KeyContacts::new(project.id(), &*self.clock);
        self.store.create(&project, &record, &contacts).await?;
        tracing::info!(
            project_id = %project.id(),
            project_type = %project.project_type(),
            "created project"
        );
        Ok(project)
    }

    /// Loads a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::NotFound`] when the project does not
    /// exist.
    pub async fn get_project(&self, project_id: ProjectId) -> ProjectLifecycleResult<Project> {
        self.store
            .find_by_id(project_id)
            .await?
            .ok_or(ProjectLifecycleError::NotFound(project_id))
    }

    /// Activates an inactive project on handover.
    ///
    /// When the project goes to the caseworker team with comments, the
    /// comments are stored as a handover note authored by the handing-over
    /// user, in the same write as the transition.
    ///
    /// # Errors
    ///
    /// Returns a state conflict unless the project is inactive, or
    /// [`ProjectDomainError::MissingSharepointLink`] when a required link is
    /// blank.
    pub async fn assign_on_handover(
        &self,
        project_id: ProjectId,
        assignment: &HandoverAssignment,
    ) -> ProjectLifecycleResult<Project> {
        let mut project = self.get_project(project_id).await?;
        let expected = project.state();
        project.assign_on_handover(assignment, &*self.clock)?;

        let mut unit = ProjectUnitOfWork::new(project, expected);
        if let Some(comments) = assignment.caseworker_comments() {
            let note = Note::new(project_id, assignment.user_id(), comments, &*self.clock)?
                .with_task_identifier(TaskIdentifier::Handover);
            unit = unit.with_note(note);
        }
        self.commit(&unit).await?;
        tracing::info!(
            project_id = %project_id,
            caseworker_team = assignment.assigns_to_caseworker_team(),
            "project handed over"
        );
        Ok(unit.into_project())
    }

    /// Builds the project's checklist with each applicable task's status.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the project or one of its records is
    /// missing, or [`ProjectDomainError::TaskDataTypeMismatch`] when the
    /// stored checklist has the wrong shape.
    pub async fn get_task_list(&self, project_id: ProjectId) -> ProjectLifecycleResult<TaskList> {
        let project = self.get_project(project_id).await?;
        self.task_list_for(&project).await
    }

    /// Completes an active project when nothing blocks it.
    ///
    /// A blocked completion changes nothing and is reported as
    /// [`CompletionOutcome::Blocked`], not as an error. The commit is guarded
    /// on the project version the checklist was validated against.
    ///
    /// # Errors
    ///
    /// Returns a state conflict unless the project is active, including when
    /// it is already completed, and a retryable
    /// [`ProjectRepositoryError::VersionConflict`] when the checklist or key
    /// contacts changed during validation.
    pub async fn complete_project(
        &self,
        project_id: ProjectId,
    ) -> ProjectLifecycleResult<CompletionOutcome> {
        let mut project = self.get_project(project_id).await?;
        project.ensure_permits(ProjectEvent::Complete)?;

        let task_list = self.task_list_for(&project).await?;
        let validation = CompletionValidation::for_project(&project, &task_list);
        if !validation.is_eligible() {
            tracing::warn!(
                project_id = %project_id,
                blockers = validation.blockers().len(),
                "project completion blocked"
            );
            return Ok(CompletionOutcome::Blocked(validation));
        }

        let expected = project.state();
        project.complete(&*self.clock)?;
        let unit = ProjectUnitOfWork::new(project, expected);
        self.commit(&unit).await?;
        tracing::info!(project_id = %project_id, "project completed");
        Ok(CompletionOutcome::Completed(unit.into_project()))
    }

    /// Deletes an active project.
    ///
    /// # Errors
    ///
    /// Returns a state conflict unless the project is active.
    pub async fn delete_project(&self, project_id: ProjectId) -> ProjectLifecycleResult<Project> {
        let mut project = self.get_project(project_id).await?;
        let expected = project.state();
        project.delete(&*self.clock)?;
        let unit = ProjectUnitOfWork::new(project, expected);
        self.commit(&unit).await?;
        tracing::info!(project_id = %project_id, "project deleted");
        Ok(unit.into_project())
    }

    /// Applies project-level field changes, guarded on the current state.
    ///
    /// # Errors
    ///
    /// Returns a state conflict when the project is in a terminal state.
    pub async fn update_project_details(
        &self,
        project_id: ProjectId,
        update: ProjectDetailsUpdate,
    ) -> ProjectLifecycleResult<Project> {
        let mut project = self.get_project(project_id).await?;
        let expected = project.state();
        project.update_details(update, &*self.clock)?;
        let unit = ProjectUnitOfWork::new(project, expected);
        self.commit(&unit).await?;
        Ok(unit.into_project())
    }

    /// Loads the project's checklist record.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the project or record is missing.
    pub async fn get_task_data(&self, project_id: ProjectId) -> ProjectLifecycleResult<TaskRecord> {
        let project = self.get_project(project_id).await?;
        self.task_record_for(&project).await
    }

    /// Replaces the project's checklist record, guarded on the project's
    /// state and version.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskDataTypeMismatch`] when `record`
    /// has the other project type's shape, and a state conflict when the
    /// project is in a terminal state or leaves its state before the write
    /// lands.
    pub async fn update_task_data(
        &self,
        project_id: ProjectId,
        record: &TaskRecord,
    ) -> ProjectLifecycleResult<()> {
        let project = self.get_project(project_id).await?;
        project.ensure_permits(ProjectEvent::Update)?;
        ensure_shape(&project, record)?;
        let expected = project.state();
        let unit = ProjectUnitOfWork::new(project, expected).with_task_record(record.clone());
        self.commit(&unit).await?;
        tracing::debug!(project_id = %project_id, "updated task data");
        Ok(())
    }

    /// Loads the project's key contacts.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the project or record is missing.
    pub async fn get_key_contacts(
        &self,
        project_id: ProjectId,
    ) -> ProjectLifecycleResult<KeyContacts> {
        self.store
            .find_by_project_id(project_id)
            .await?
            .ok_or(ProjectLifecycleError::KeyContactsNotFound(project_id))
    }

    /// Sets or clears one of the project's key contacts, guarded on the
    /// project's state and version.
    ///
    /// # Errors
    ///
    /// Returns a state conflict when the project is in a terminal state or
    /// leaves its state before the write lands, or a not-found error when the
    /// project or record is missing.
    pub async fn assign_key_contact(
        &self,
        project_id: ProjectId,
        role: KeyContactRole,
        contact: Option<ContactId>,
    ) -> ProjectLifecycleResult<KeyContacts> {
        let project = self.get_project(project_id).await?;
        project.ensure_permits(ProjectEvent::Update)?;
        let mut contacts = self.get_key_contacts(project_id).await?;
        contacts.assign(role, contact, &*self.clock);
        let expected = project.state();
        let unit = ProjectUnitOfWork::new(project, expected).with_key_contacts(contacts.clone());
        self.commit(&unit).await?;
        tracing::debug!(project_id = %project_id, role = role.as_str(), "assigned key contact");
        Ok(contacts)
    }

    /// Appends an audit note to a project in any state.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::BlankNoteBody`] when the body is blank,
    /// or [`ProjectLifecycleError::NotFound`] when the project is missing.
    pub async fn add_task_note(&self, request: AddTaskNoteRequest) -> ProjectLifecycleResult<Note> {
        let AddTaskNoteRequest {
            project_id,
            user_id,
            body,
            task_identifier,
        } = request;
        self.get_project(project_id).await?;

        let untagged = Note::new(project_id, user_id, body, &*self.clock)?;
        let note = match task_identifier {
            Some(identifier) => untagged.with_task_identifier(identifier),
            None => untagged,
        };
        self.store.append(&note).await?;
        Ok(note)
    }

    /// Lists a project's notes, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Repository`] when the lookup fails.
    pub async fn get_notes(&self, project_id: ProjectId) -> ProjectLifecycleResult<Vec<Note>> {
        Ok(NoteRepository::find_by_project(&*self.store, project_id).await?)
    }

    /// Returns the revocation recorded against a project, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Repository`] when the lookup fails.
    pub async fn get_dao_revocation(
        &self,
        project_id: ProjectId,
    ) -> ProjectLifecycleResult<Option<DaoRevocation>> {
        Ok(DaoRevocationRepository::find_by_project(&*self.store, project_id).await?)
    }

    pub(crate) async fn commit(&self, unit: &ProjectUnitOfWork) -> ProjectLifecycleResult<()> {
        self.store.commit(unit).await.map_err(|err| {
            if err.is_retryable() {
                tracing::warn!(
                    project_id = %unit.project().id(),
                    error = %err,
                    "lost race committing project write"
                );
            }
            ProjectLifecycleError::from(err)
        })
    }

    async fn task_record_for(&self, project: &Project) -> ProjectLifecycleResult<TaskRecord> {
        let record = TaskDataRepository::find(&*self.store, project.tasks_data_id())
            .await?
            .ok_or(ProjectLifecycleError::TaskDataNotFound(project.tasks_data_id()))?;
        ensure_shape(project, &record)?;
        Ok(record)
    }

    async fn task_list_for(&self, project: &Project) -> ProjectLifecycleResult<TaskList> {
        let record = self.task_record_for(project).await?;
        let contacts = self.get_key_contacts(project.id()).await?;
        Ok(TaskList::for_project(project, &record, &contacts)?)
    }
}

fn ensure_shape(project: &Project, record: &TaskRecord) -> Result<(), ProjectDomainError> {
    if record.project_type() == project.project_type() {
        Ok(())
    } else {
        Err(ProjectDomainError::TaskDataTypeMismatch {
            project_id: project.id(),
            expected: project.project_type(),
            found: record.project_type(),
        })
    }
}
