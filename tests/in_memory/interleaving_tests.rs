//! Writes landing between a service's reads and its commit.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::helpers::{TestService, ready_to_complete};
use async_trait::async_trait;
use casework::project::{
    adapters::memory::InMemoryProjectStore,
    checklist::{CompletionBlocker, FormMTask, TaskIdentifier, TaskRecord},
    domain::{
        ContactId, DaoRevocation, KeyContactRole, KeyContacts, Note, NoteId, Project, ProjectId,
        ProjectState, ProjectType, TaskDataId,
    },
    ports::{
        DaoRevocationRepository, KeyContactRepository, NoteRepository, ProjectRepository,
        ProjectRepositoryError, ProjectRepositoryResult, ProjectUnitOfWork, TaskDataRepository,
    },
    services::{CompletionOutcome, ProjectLifecycleError, ProjectLifecycleService},
};
use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::rstest;

/// A write another user makes while the service is mid-command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interleaved {
    /// Form M goes back to only "received".
    UntickFormM,
    /// The headteacher contact is cleared.
    ClearHeadteacher,
    /// The project is completed.
    CompleteProject,
}

/// Applies one [`Interleaved`] write just before the first commit it sees.
#[derive(Debug)]
struct InterleavingStore {
    inner: InMemoryProjectStore,
    write: Interleaved,
    armed: AtomicBool,
}

impl InterleavingStore {
    const fn new(inner: InMemoryProjectStore, write: Interleaved) -> Self {
        Self {
            inner,
            write,
            armed: AtomicBool::new(true),
        }
    }

    async fn interleave(&self, project_id: ProjectId) -> ProjectRepositoryResult<()> {
        let mut project = self
            .inner
            .find_by_id(project_id)
            .await?
            .ok_or(ProjectRepositoryError::NotFound(project_id))?;
        match self.write {
            Interleaved::UntickFormM => {
                let id = project.tasks_data_id();
                let Some(TaskRecord::Transfer(mut data)) =
                    TaskDataRepository::find(&self.inner, id).await?
                else {
                    return Err(ProjectRepositoryError::TaskDataNotFound(id));
                };
                data.form_m = FormMTask {
                    received_form_m: true,
                    ..FormMTask::default()
                };
                TaskDataRepository::update(&self.inner, id, &TaskRecord::Transfer(data)).await
            }
            Interleaved::ClearHeadteacher => {
                let mut contacts = self
                    .inner
                    .find_by_project_id(project_id)
                    .await?
                    .ok_or(ProjectRepositoryError::KeyContactsNotFound(project_id))?;
                contacts.assign(KeyContactRole::Headteacher, None, &DefaultClock);
                KeyContactRepository::update(&self.inner, &contacts).await
            }
            Interleaved::CompleteProject => {
                let expected = project.state();
                project
                    .complete(&DefaultClock)
                    .map_err(ProjectRepositoryError::persistence)?;
                self.inner
                    .commit(&ProjectUnitOfWork::new(project, expected))
                    .await
            }
        }
    }
}

#[async_trait]
impl ProjectRepository for InterleavingStore {
    async fn create(
        &self,
        project: &Project,
        record: &TaskRecord,
        key_contacts: &KeyContacts,
    ) -> ProjectRepositoryResult<()> {
        self.inner.create(project, record, key_contacts).await
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.inner.find_by_id(id).await
    }

    async fn commit(&self, unit: &ProjectUnitOfWork) -> ProjectRepositoryResult<()> {
        if self.armed.swap(false, Ordering::SeqCst) {
            self.interleave(unit.project().id()).await?;
        }
        self.inner.commit(unit).await
    }
}

#[async_trait]
impl TaskDataRepository for InterleavingStore {
    async fn find(&self, id: TaskDataId) -> ProjectRepositoryResult<Option<TaskRecord>> {
        TaskDataRepository::find(&self.inner, id).await
    }

    async fn update(&self, id: TaskDataId, record: &TaskRecord) -> ProjectRepositoryResult<()> {
        TaskDataRepository::update(&self.inner, id, record).await
    }
}

#[async_trait]
impl KeyContactRepository for InterleavingStore {
    async fn find_by_project_id(
        &self,
        project_id: ProjectId,
    ) -> ProjectRepositoryResult<Option<KeyContacts>> {
        self.inner.find_by_project_id(project_id).await
    }

    async fn update(&self, key_contacts: &KeyContacts) -> ProjectRepositoryResult<()> {
        KeyContactRepository::update(&self.inner, key_contacts).await
    }
}

#[async_trait]
impl NoteRepository for InterleavingStore {
    async fn append(&self, note: &Note) -> ProjectRepositoryResult<NoteId> {
        self.inner.append(note).await
    }

    async fn find_by_project(&self, project_id: ProjectId) -> ProjectRepositoryResult<Vec<Note>> {
        NoteRepository::find_by_project(&self.inner, project_id).await
    }
}

#[async_trait]
impl DaoRevocationRepository for InterleavingStore {
    async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> ProjectRepositoryResult<Option<DaoRevocation>> {
        DaoRevocationRepository::find_by_project(&self.inner, project_id).await
    }
}

type InterleavedService = ProjectLifecycleService<InterleavingStore, DefaultClock>;

/// Sets up a ready project through a plain service, then returns it with a
/// service over the same data that interleaves `write` into its first commit.
async fn ready_with_interleaving(
    project_type: ProjectType,
    write: Interleaved,
) -> eyre::Result<(Project, TestService, InterleavedService)> {
    let store = InMemoryProjectStore::new();
    let plain = ProjectLifecycleService::new(Arc::new(store.clone()), Arc::new(DefaultClock));
    let project = ready_to_complete(&plain, project_type).await?;
    let interleaved = ProjectLifecycleService::new(
        Arc::new(InterleavingStore::new(store, write)),
        Arc::new(DefaultClock),
    );
    Ok((project, plain, interleaved))
}

#[rstest]
#[case::form_m_unticked(ProjectType::Transfer, Interleaved::UntickFormM, TaskIdentifier::FormM)]
#[case::headteacher_cleared(
    ProjectType::Conversion,
    Interleaved::ClearHeadteacher,
    TaskIdentifier::ConfirmHeadteacherDetails
)]
#[tokio::test(flavor = "multi_thread")]
async fn completion_fails_when_checklist_changes_before_commit(
    #[case] project_type: ProjectType,
    #[case] write: Interleaved,
    #[case] reopened: TaskIdentifier,
) -> eyre::Result<()> {
    let (project, plain, interleaved) = ready_with_interleaving(project_type, write).await?;

    let result = interleaved.complete_project(project.id()).await;

    let Err(err) = result else {
        bail!("completion validated against a stale checklist must not commit");
    };
    ensure!(err.is_retryable(), "unexpected error: {err}");
    ensure!(matches!(
        err,
        ProjectLifecycleError::Repository(ProjectRepositoryError::VersionConflict { .. })
    ));
    ensure!(plain.get_project(project.id()).await?.state() == ProjectState::Active);

    let retried = interleaved.complete_project(project.id()).await?;
    let CompletionOutcome::Blocked(validation) = retried else {
        bail!("retry must see the reopened task, got {retried:?}");
    };
    ensure!(
        validation.blockers()
            == [CompletionBlocker::IncompleteTask {
                identifier: reopened,
                label: reopened.label(),
            }]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn checklist_edit_does_not_land_on_a_project_completed_meanwhile() -> eyre::Result<()> {
    let (project, plain, interleaved) =
        ready_with_interleaving(ProjectType::Transfer, Interleaved::CompleteProject).await?;
    let before = plain.get_task_data(project.id()).await?;
    let TaskRecord::Transfer(mut edited) = before.clone() else {
        bail!("transfer project must hold a transfer checklist");
    };
    edited.form_m = FormMTask::default();

    let result = interleaved
        .update_task_data(project.id(), &TaskRecord::Transfer(edited))
        .await;

    ensure!(result.is_err_and(|err| err.is_state_conflict()));
    ensure!(plain.get_project(project.id()).await?.state() == ProjectState::Completed);
    ensure!(plain.get_task_data(project.id()).await? == before);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn contact_change_does_not_land_on_a_project_completed_meanwhile() -> eyre::Result<()> {
    let (project, plain, interleaved) =
        ready_with_interleaving(ProjectType::Conversion, Interleaved::CompleteProject).await?;
    let before = plain.get_key_contacts(project.id()).await?;

    let result = interleaved
        .assign_key_contact(
            project.id(),
            KeyContactRole::Headteacher,
            Some(ContactId::new()),
        )
        .await;

    ensure!(result.is_err_and(|err| err.is_state_conflict()));
    ensure!(plain.get_project(project.id()).await?.state() == ProjectState::Completed);
    ensure!(plain.get_key_contacts(project.id()).await? == before);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn direct_record_writes_advance_the_project_version() -> eyre::Result<()> {
    let store = InMemoryProjectStore::new();
    let service = ProjectLifecycleService::new(Arc::new(store.clone()), Arc::new(DefaultClock));
    let project = ready_to_complete(&service, ProjectType::Conversion).await?;
    let record = service.get_task_data(project.id()).await?;
    let contacts = service.get_key_contacts(project.id()).await?;

    TaskDataRepository::update(&store, project.tasks_data_id(), &record).await?;
    KeyContactRepository::update(&store, &contacts).await?;

    let stored = service.get_project(project.id()).await?;
    ensure!(stored.version() == project.version() + 2);
    Ok(())
}
