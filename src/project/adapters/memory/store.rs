//! In-memory project store for lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::project::{
    checklist::TaskRecord,
    domain::{DaoRevocation, KeyContacts, Note, NoteId, Project, ProjectId, TaskDataId},
    ports::{
        DaoRevocationRepository, KeyContactRepository, NoteRepository, ProjectRepository,
        ProjectRepositoryError, ProjectRepositoryResult, ProjectUnitOfWork, TaskDataRepository,
    },
};

/// Thread-safe in-memory store implementing every project port.
///
/// All writes take the same lock, so a commit is atomic with respect to
/// every other operation on the store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStore {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: HashMap<ProjectId, Project>,
    task_data: HashMap<TaskDataId, TaskRecord>,
    key_contacts: HashMap<ProjectId, KeyContacts>,
    notes: Vec<Note>,
    revocations: HashMap<ProjectId, DaoRevocation>,
}

impl InMemoryProjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(err: &PoisonError<T>) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectStore {
    async fn create(
        &self,
        project: &Project,
        record: &TaskRecord,
        key_contacts: &KeyContacts,
    ) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        if state.projects.contains_key(&project.id()) {
            return Err(ProjectRepositoryError::DuplicateProject(project.id()));
        }
        state.projects.insert(project.id(), project.clone());
        state
            .task_data
            .insert(project.tasks_data_id(), record.clone());
        state
            .key_contacts
            .insert(project.id(), key_contacts.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn commit(&self, unit: &ProjectUnitOfWork) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let project_id = unit.project().id();
        let stored = state
            .projects
            .get(&project_id)
            .ok_or(ProjectRepositoryError::NotFound(project_id))?;
        if stored.state() != unit.expected_state() {
            return Err(ProjectRepositoryError::StateConflict {
                project_id,
                expected: unit.expected_state(),
                actual: stored.state(),
            });
        }
        if stored.version() != unit.expected_version() {
            return Err(ProjectRepositoryError::VersionConflict {
                project_id,
                expected: unit.expected_version(),
                actual: stored.version(),
            });
        }

        let project = unit.project();
        state.projects.insert(project_id, project.clone());
        if let Some(record) = unit.task_record() {
            state
                .task_data
                .insert(project.tasks_data_id(), record.clone());
        }
        if let Some(key_contacts) = unit.key_contacts() {
            state.key_contacts.insert(project_id, key_contacts.clone());
        }
        state.notes.extend(unit.notes().iter().cloned());
        if let Some(revocation) = unit.revocation() {
            state.revocations.insert(project_id, revocation.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl TaskDataRepository for InMemoryProjectStore {
    async fn find(&self, id: TaskDataId) -> ProjectRepositoryResult<Option<TaskRecord>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.task_data.get(&id).cloned())
    }

    async fn update(&self, id: TaskDataId, record: &TaskRecord) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let slot = state
            .task_data
            .get_mut(&id)
            .ok_or(ProjectRepositoryError::TaskDataNotFound(id))?;
        *slot = record.clone();
        if let Some(owner) = state
            .projects
            .values_mut()
            .find(|project| project.tasks_data_id() == id)
        {
            owner.advance_version();
        }
        Ok(())
    }
}

#[async_trait]
impl KeyContactRepository for InMemoryProjectStore {
    async fn find_by_project_id(
        &self,
        project_id: ProjectId,
    ) -> ProjectRepositoryResult<Option<KeyContacts>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.key_contacts.get(&project_id).cloned())
    }

    async fn update(&self, key_contacts: &KeyContacts) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let project_id = key_contacts.project_id();
        let slot = state
            .key_contacts
            .get_mut(&project_id)
            .ok_or(ProjectRepositoryError::KeyContactsNotFound(project_id))?;
        *slot = key_contacts.clone();
        if let Some(owner) = state.projects.get_mut(&project_id) {
            owner.advance_version();
        }
        Ok(())
    }
}

#[async_trait]
impl NoteRepository for InMemoryProjectStore {
    async fn append(&self, note: &Note) -> ProjectRepositoryResult<NoteId> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        if !state.projects.contains_key(&note.project_id()) {
            return Err(ProjectRepositoryError::NotFound(note.project_id()));
        }
        state.notes.push(note.clone());
        Ok(note.id())
    }

    async fn find_by_project(&self, project_id: ProjectId) -> ProjectRepositoryResult<Vec<Note>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state
            .notes
            .iter()
            .filter(|note| note.project_id() == project_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DaoRevocationRepository for InMemoryProjectStore {
    async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> ProjectRepositoryResult<Option<DaoRevocation>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.revocations.get(&project_id).cloned())
    }
}
