//! `PostgreSQL` store implementing every project port.

use super::{
    conversion::{
        key_contacts_to_row, note_to_row, project_changeset, project_to_row, record_data,
        record_to_row, revocation_to_rows, row_to_key_contacts, row_to_note, row_to_project,
        row_to_record, rows_to_revocation,
    },
    models::{
        DaoRevocationReasonRow, DaoRevocationRow, KeyContactsRow, NoteRow, ProjectRow, TaskDataRow,
    },
    schema::{
        dao_revocation_reasons, dao_revocations, key_contacts, notes, projects, tasks_data,
    },
};
use crate::config::DatabaseConfig;
use crate::project::{
    checklist::TaskRecord,
    domain::{
        DaoRevocation, KeyContacts, Note, NoteId, Project, ProjectId, ProjectState, TaskDataId,
    },
    ports::{
        DaoRevocationRepository, KeyContactRepository, NoteRepository, ProjectRepository,
        ProjectRepositoryError, ProjectRepositoryResult, ProjectUnitOfWork, TaskDataRepository,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by project adapters.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed project store.
///
/// Every operation runs on the blocking thread pool through
/// [`tokio::task::spawn_blocking`]. Multi-row writes run inside a single
/// transaction.
#[derive(Debug, Clone)]
pub struct PostgresProjectStore {
    pool: ProjectPgPool,
}

impl PostgresProjectStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool from configuration and wraps it in a store.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the pool cannot
    /// open its initial connections.
    pub fn connect(config: &DatabaseConfig) -> ProjectRepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(config.database_url());
        let pool = Pool::builder()
            .max_size(config.pool_size())
            .build(manager)
            .map_err(ProjectRepositoryError::persistence)?;
        tracing::info!(pool_size = config.pool_size(), "connected project store");
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProjectRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProjectRepositoryError::persistence)?
    }
}

impl From<DieselError> for ProjectRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectStore {
    async fn create(
        &self,
        project: &Project,
        record: &TaskRecord,
        contacts: &KeyContacts,
    ) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let project_row = project_to_row(project)?;
        let task_row = record_to_row(project.tasks_data_id(), record, project.created_at())?;
        let contacts_row = key_contacts_to_row(contacts);

        self.run_blocking(move |connection| {
            connection.transaction::<_, ProjectRepositoryError, _>(|tx| {
                diesel::insert_into(projects::table)
                    .values(&project_row)
                    .execute(tx)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                            if is_constraint(info.as_ref(), "projects_pkey") =>
                        {
                            ProjectRepositoryError::DuplicateProject(project_id)
                        }
                        _ => ProjectRepositoryError::persistence(err),
                    })?;
                diesel::insert_into(tasks_data::table)
                    .values(&task_row)
                    .execute(tx)?;
                diesel::insert_into(key_contacts::table)
                    .values(&contacts_row)
                    .execute(tx)?;
                Ok(())
            })
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .find(id.into_inner())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn commit(&self, unit: &ProjectUnitOfWork) -> ProjectRepositoryResult<()> {
        let project = unit.project();
        let project_id = project.id();
        let expected = unit.expected_state();
        let expected_version = unit.expected_version();
        let stored_version =
            i64::try_from(expected_version).map_err(ProjectRepositoryError::persistence)?;
        let changeset = project_changeset(project)?;
        let task_write = unit
            .task_record()
            .map(|record| {
                record_data(record)
                    .map(|data| (project.tasks_data_id(), record.project_type().as_str(), data))
            })
            .transpose()?;
        let contacts_row = unit.key_contacts().map(key_contacts_to_row);
        let note_rows: Vec<NoteRow> = unit.notes().iter().map(note_to_row).collect();
        let revocation_rows = unit.revocation().map(revocation_to_rows);

        self.run_blocking(move |connection| {
            connection.transaction::<_, ProjectRepositoryError, _>(|tx| {
                let updated = diesel::update(
                    projects::table
                        .filter(projects::id.eq(project_id.into_inner()))
                        .filter(projects::state.eq(expected.as_str()))
                        .filter(projects::version.eq(stored_version)),
                )
                .set(&changeset)
                .execute(tx)?;
                if updated == 0 {
                    return Err(rejected_commit(tx, project_id, expected, expected_version));
                }

                if let Some((tasks_data_id, shape, data)) = &task_write {
                    write_task_data(tx, *tasks_data_id, shape, data)?;
                }
                if let Some(row) = &contacts_row {
                    write_key_contacts(tx, row)?;
                }

                if !note_rows.is_empty() {
                    diesel::insert_into(notes::table)
                        .values(&note_rows)
                        .execute(tx)?;
                }
                if let Some((revocation_row, reason_rows)) = &revocation_rows {
                    diesel::insert_into(dao_revocations::table)
                        .values(revocation_row)
                        .execute(tx)?;
                    diesel::insert_into(dao_revocation_reasons::table)
                        .values(reason_rows)
                        .execute(tx)?;
                }
                Ok(())
            })
        })
        .await
    }
}

#[async_trait]
impl TaskDataRepository for PostgresProjectStore {
    async fn find(&self, id: TaskDataId) -> ProjectRepositoryResult<Option<TaskRecord>> {
        self.run_blocking(move |connection| {
            let row = tasks_data::table
                .find(id.into_inner())
                .select(TaskDataRow::as_select())
                .first::<TaskDataRow>(connection)
                .optional()?;
            row.map(row_to_record).transpose()
        })
        .await
    }

    async fn update(&self, id: TaskDataId, record: &TaskRecord) -> ProjectRepositoryResult<()> {
        let data = record_data(record)?;
        let shape = record.project_type().as_str();

        self.run_blocking(move |connection| {
            connection.transaction::<_, ProjectRepositoryError, _>(|tx| {
                write_task_data(tx, id, shape, &data)?;
                diesel::update(projects::table.filter(projects::tasks_data_id.eq(id.into_inner())))
                    .set(projects::version.eq(projects::version + 1_i64))
                    .execute(tx)?;
                Ok(())
            })
        })
        .await
    }
}

#[async_trait]
impl KeyContactRepository for PostgresProjectStore {
    async fn find_by_project_id(
        &self,
        project_id: ProjectId,
    ) -> ProjectRepositoryResult<Option<KeyContacts>> {
        self.run_blocking(move |connection| {
            let row = key_contacts::table
                .filter(key_contacts::project_id.eq(project_id.into_inner()))
                .select(KeyContactsRow::as_select())
                .first::<KeyContactsRow>(connection)
                .optional()?;
            Ok(row.map(row_to_key_contacts))
        })
        .await
    }

    async fn update(&self, contacts: &KeyContacts) -> ProjectRepositoryResult<()> {
        let project_id = contacts.project_id();
        let row = key_contacts_to_row(contacts);

        self.run_blocking(move |connection| {
            connection.transaction::<_, ProjectRepositoryError, _>(|tx| {
                write_key_contacts(tx, &row)?;
                diesel::update(projects::table.find(project_id.into_inner()))
                    .set(projects::version.eq(projects::version + 1_i64))
                    .execute(tx)?;
                Ok(())
            })
        })
        .await
    }
}

#[async_trait]
impl NoteRepository for PostgresProjectStore {
    async fn append(&self, note: &Note) -> ProjectRepositoryResult<NoteId> {
        let note_id = note.id();
        let project_id = note.project_id();
        let row = note_to_row(note);

        self.run_blocking(move |connection| {
            diesel::insert_into(notes::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        ProjectRepositoryError::NotFound(project_id)
                    }
                    _ => ProjectRepositoryError::persistence(err),
                })?;
            Ok(note_id)
        })
        .await
    }

    async fn find_by_project(&self, project_id: ProjectId) -> ProjectRepositoryResult<Vec<Note>> {
        self.run_blocking(move |connection| {
            notes::table
                .filter(notes::project_id.eq(project_id.into_inner()))
                .order((notes::created_at.asc(), notes::id.asc()))
                .select(NoteRow::as_select())
                .load::<NoteRow>(connection)?
                .into_iter()
                .map(row_to_note)
                .collect()
        })
        .await
    }
}

#[async_trait]
impl DaoRevocationRepository for PostgresProjectStore {
    async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> ProjectRepositoryResult<Option<DaoRevocation>> {
        self.run_blocking(move |connection| {
            let found = dao_revocations::table
                .filter(dao_revocations::project_id.eq(project_id.into_inner()))
                .select(DaoRevocationRow::as_select())
                .first::<DaoRevocationRow>(connection)
                .optional()?;
            let Some(row) = found else {
                return Ok(None);
            };
            let reason_rows = dao_revocation_reasons::table
                .filter(dao_revocation_reasons::dao_revocation_id.eq(row.id))
                .select(DaoRevocationReasonRow::as_select())
                .load::<DaoRevocationReasonRow>(connection)?;
            rows_to_revocation(row, reason_rows).map(Some)
        })
        .await
    }
}

fn write_task_data(
    connection: &mut PgConnection,
    id: TaskDataId,
    shape: &str,
    data: &serde_json::Value,
) -> ProjectRepositoryResult<()> {
    let updated = diesel::update(tasks_data::table.find(id.into_inner()))
        .set((
            tasks_data::tasks_data_type.eq(shape),
            tasks_data::data.eq(data),
            tasks_data::updated_at.eq(diesel::dsl::now),
        ))
        .execute(connection)?;
    if updated == 0 {
        return Err(ProjectRepositoryError::TaskDataNotFound(id));
    }
    Ok(())
}

fn write_key_contacts(
    connection: &mut PgConnection,
    row: &KeyContactsRow,
) -> ProjectRepositoryResult<()> {
    let updated = diesel::update(
        key_contacts::table.filter(key_contacts::project_id.eq(row.project_id)),
    )
    .set((
        key_contacts::headteacher_id.eq(row.headteacher_id),
        key_contacts::chair_of_governors_id.eq(row.chair_of_governors_id),
        key_contacts::incoming_trust_ceo_id.eq(row.incoming_trust_ceo_id),
        key_contacts::outgoing_trust_ceo_id.eq(row.outgoing_trust_ceo_id),
        key_contacts::updated_at.eq(row.updated_at),
    ))
    .execute(connection)?;
    if updated == 0 {
        return Err(ProjectRepositoryError::KeyContactsNotFound(
            ProjectId::from_uuid(row.project_id),
        ));
    }
    Ok(())
}

fn is_constraint(info: &dyn DatabaseErrorInformation, constraint: &str) -> bool {
    info.constraint_name().is_some_and(|name| name == constraint)
}

/// Explains why a guarded project update touched no rows.
fn rejected_commit(
    connection: &mut PgConnection,
    project_id: ProjectId,
    expected: ProjectState,
    expected_version: u64,
) -> ProjectRepositoryError {
    let current = projects::table
        .find(project_id.into_inner())
        .select((projects::state, projects::version))
        .first::<(String, i64)>(connection)
        .optional();
    let (stored_state, stored_version) = match current {
        Ok(Some(found)) => found,
        Ok(None) => return ProjectRepositoryError::NotFound(project_id),
        Err(err) => return ProjectRepositoryError::persistence(err),
    };
    let actual = match ProjectState::try_from(stored_state.as_str()) {
        Ok(actual) => actual,
        Err(err) => return ProjectRepositoryError::persistence(err),
    };
    if actual != expected {
        return ProjectRepositoryError::StateConflict {
            project_id,
            expected,
            actual,
        };
    }
    match u64::try_from(stored_version) {
        Ok(actual_version) => ProjectRepositoryError::VersionConflict {
            project_id,
            expected: expected_version,
            actual: actual_version,
        },
        Err(err) => ProjectRepositoryError::persistence(err),
    }
}
