//! Store failures surfacing through the lifecycle service.

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use casework::project::{
    adapters::memory::InMemoryProjectStore,
    checklist::TaskRecord,
    domain::{
        DaoRevocation, HandoverAssignment, KeyContacts, NewProject, Note, NoteId, Project,
        ProjectId, ProjectState, ProjectType, TaskDataId, UserId,
    },
    ports::{
        DaoRevocationRepository, KeyContactRepository, NoteRepository, ProjectRepository,
        ProjectRepositoryError, ProjectRepositoryResult, ProjectUnitOfWork, TaskDataRepository,
    },
    services::{ProjectLifecycleError, ProjectLifecycleService},
};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

/// Serves reads from memory but fails every commit.
#[derive(Debug, Clone, Default)]
struct CommitFailingStore {
    inner: InMemoryProjectStore,
}

fn connection_lost() -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(io::Error::new(
        io::ErrorKind::ConnectionReset,
        "connection lost",
    ))
}

#[async_trait]
impl ProjectRepository for CommitFailingStore {
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

    async fn commit(&self, _unit: &ProjectUnitOfWork) -> ProjectRepositoryResult<()> {
        Err(connection_lost())
    }
}

#[async_trait]
impl TaskDataRepository for CommitFailingStore {
    async fn find(&self, id: TaskDataId) -> ProjectRepositoryResult<Option<TaskRecord>> {
        TaskDataRepository::find(&self.inner, id).await
    }

    async fn update(&self, id: TaskDataId, record: &TaskRecord) -> ProjectRepositoryResult<()> {
        TaskDataRepository::update(&self.inner, id, record).await
    }
}

#[async_trait]
impl KeyContactRepository for CommitFailingStore {
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
impl NoteRepository for CommitFailingStore {
    async fn append(&self, note: &Note) -> ProjectRepositoryResult<NoteId> {
        self.inner.append(note).await
    }

    async fn find_by_project(&self, project_id: ProjectId) -> ProjectRepositoryResult<Vec<Note>> {
        NoteRepository::find_by_project(&self.inner, project_id).await
    }
}

#[async_trait]
impl DaoRevocationRepository for CommitFailingStore {
    async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> ProjectRepositoryResult<Option<DaoRevocation>> {
        DaoRevocationRepository::find_by_project(&self.inner, project_id).await
    }
}

type FailingService = ProjectLifecycleService<CommitFailingStore, DefaultClock>;

#[fixture]
fn failing_service() -> FailingService {
    ProjectLifecycleService::new(
        Arc::new(CommitFailingStore::default()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn commit_failure_is_reported_as_persistence_error(
    failing_service: FailingService,
) -> eyre::Result<()> {
    let project = failing_service
        .create_project(NewProject::new(ProjectType::Conversion))
        .await?;
    let assignment = HandoverAssignment::new(
        UserId::new(),
        "https://sharepoint.example/establishment",
        "https://sharepoint.example/incoming-trust",
    );

    let result = failing_service
        .assign_on_handover(project.id(), &assignment)
        .await;

    let Err(err) = result else {
        eyre::bail!("handover must fail when the commit fails");
    };
    ensure!(matches!(
        err,
        ProjectLifecycleError::Repository(ProjectRepositoryError::Persistence(_))
    ));
    ensure!(!err.is_retryable());
    ensure!(!err.is_state_conflict());
    let stored = failing_service.get_project(project.id()).await?;
    ensure!(stored.state() == ProjectState::Inactive);
    Ok(())
}
