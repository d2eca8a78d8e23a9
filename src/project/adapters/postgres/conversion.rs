//! Conversions between project domain types and Diesel rows.

use super::models::{
    DaoRevocationReasonRow, DaoRevocationRow, KeyContactsRow, NoteRow, ProjectChangeset,
    ProjectRow, TaskDataRow,
};
use crate::project::{
    checklist::{ConversionTasksData, TaskIdentifier, TaskRecord, TransferTasksData},
    domain::{
        ContactId, DaoRevocation, DaoRevocationId, DaoRevocationReason, DaoRevocationReasonId,
        DaoRevokedReason, DecisionMakerRole, KeyContactId, KeyContactRole, KeyContacts, Notable,
        NotableType, Note, NoteId, PersistedDaoRevocationData, PersistedKeyContactsData,
        PersistedNoteData, PersistedProjectData, Project, ProjectId, ProjectState, ProjectTeam,
        ProjectType, SharepointLink, TaskDataId, UserId,
    },
    ports::{ProjectRepositoryError, ProjectRepositoryResult},
};
use chrono::{DateTime, Utc};

pub(super) fn project_to_row(project: &Project) -> ProjectRepositoryResult<ProjectRow> {
    let version = i64::try_from(project.version()).map_err(ProjectRepositoryError::persistence)?;
    Ok(ProjectRow {
        id: project.id().into_inner(),
        project_type: project.project_type().as_str().to_owned(),
        state: project.state().as_str().to_owned(),
        significant_date: project.significant_date(),
        significant_date_provisional: project.significant_date_provisional(),
        tasks_data_id: project.tasks_data_id().into_inner(),
        tasks_data_type: project.tasks_data_type().as_str().to_owned(),
        form_a_mat: project.form_a_mat(),
        directive_academy_order: project.directive_academy_order(),
        all_conditions_met: project.all_conditions_met(),
        main_contact_id: project.main_contact_id().map(ContactId::into_inner),
        two_requires_improvement: project.two_requires_improvement(),
        team: project.team().map(|team| team.as_str().to_owned()),
        assigned_to: project.assigned_to().map(UserId::into_inner),
        assigned_at: project.assigned_at(),
        establishment_sharepoint_link: owned_link(project, SharepointLink::Establishment),
        incoming_trust_sharepoint_link: owned_link(project, SharepointLink::IncomingTrust),
        outgoing_trust_sharepoint_link: owned_link(project, SharepointLink::OutgoingTrust),
        completed_at: project.completed_at(),
        created_at: project.created_at(),
        updated_at: project.updated_at(),
        version,
    })
}

pub(super) fn project_changeset(project: &Project) -> ProjectRepositoryResult<ProjectChangeset> {
    let ProjectRow {
        state,
        significant_date,
        significant_date_provisional,
        all_conditions_met,
        main_contact_id,
        two_requires_improvement,
        team,
        assigned_to,
        assigned_at,
        establishment_sharepoint_link,
        incoming_trust_sharepoint_link,
        outgoing_trust_sharepoint_link,
        completed_at,
        updated_at,
        version,
        ..
    } = project_to_row(project)?;
    Ok(ProjectChangeset {
        state,
        significant_date,
        significant_date_provisional,
        all_conditions_met,
        main_contact_id,
        two_requires_improvement,
        team,
        assigned_to,
        assigned_at,
        establishment_sharepoint_link,
        incoming_trust_sharepoint_link,
        outgoing_trust_sharepoint_link,
        completed_at,
        updated_at,
        version,
    })
}

fn owned_link(project: &Project, link: SharepointLink) -> Option<String> {
    project.sharepoint_link(link).map(str::to_owned)
}

pub(super) fn row_to_project(row: ProjectRow) -> ProjectRepositoryResult<Project> {
    let project_type = parse_project_type(&row.project_type)?;
    let tasks_data_type = parse_project_type(&row.tasks_data_type)?;
    if tasks_data_type != project_type {
        return Err(ProjectRepositoryError::persistence(std::io::Error::other(
            format!(
                "project {} stores {tasks_data_type} task data for a {project_type} project",
                row.id
            ),
        )));
    }
    let state =
        ProjectState::try_from(row.state.as_str()).map_err(ProjectRepositoryError::persistence)?;
    let team = row
        .team
        .as_deref()
        .map(ProjectTeam::try_from)
        .transpose()
        .map_err(ProjectRepositoryError::persistence)?;
    let version = u64::try_from(row.version).map_err(ProjectRepositoryError::persistence)?;

    Ok(Project::from_persisted(PersistedProjectData {
        id: ProjectId::from_uuid(row.id),
        project_type,
        state,
        significant_date: row.significant_date,
        significant_date_provisional: row.significant_date_provisional,
        tasks_data_id: TaskDataId::from_uuid(row.tasks_data_id),
        form_a_mat: row.form_a_mat,
        directive_academy_order: row.directive_academy_order,
        all_conditions_met: row.all_conditions_met,
        main_contact_id: row.main_contact_id.map(ContactId::from_uuid),
        two_requires_improvement: row.two_requires_improvement,
        team,
        assigned_to: row.assigned_to.map(UserId::from_uuid),
        assigned_at: row.assigned_at,
        establishment_sharepoint_link: row.establishment_sharepoint_link,
        incoming_trust_sharepoint_link: row.incoming_trust_sharepoint_link,
        outgoing_trust_sharepoint_link: row.outgoing_trust_sharepoint_link,
        completed_at: row.completed_at,
        created_at: row.created_at,
        updated_at: row.updated_at,
        version,
    }))
}

fn parse_project_type(value: &str) -> ProjectRepositoryResult<ProjectType> {
    ProjectType::try_from(value).map_err(ProjectRepositoryError::persistence)
}

/// Serializes the checklist fields of a record, without its shape tag.
pub(super) fn record_data(record: &TaskRecord) -> ProjectRepositoryResult<serde_json::Value> {
    let value = match record {
        TaskRecord::Conversion(data) => serde_json::to_value(data.as_ref()),
        TaskRecord::Transfer(data) => serde_json::to_value(data.as_ref()),
    };
    value.map_err(ProjectRepositoryError::persistence)
}

pub(super) fn record_to_row(
    id: TaskDataId,
    record: &TaskRecord,
    timestamp: DateTime<Utc>,
) -> ProjectRepositoryResult<TaskDataRow> {
    Ok(TaskDataRow {
        id: id.into_inner(),
        tasks_data_type: record.project_type().as_str().to_owned(),
        data: record_data(record)?,
        created_at: timestamp,
        updated_at: timestamp,
    })
}

pub(super) fn row_to_record(row: TaskDataRow) -> ProjectRepositoryResult<TaskRecord> {
    let record = match parse_project_type(&row.tasks_data_type)? {
        ProjectType::Conversion => {
            serde_json::from_value::<ConversionTasksData>(row.data).map(TaskRecord::from)
        }
        ProjectType::Transfer => {
            serde_json::from_value::<TransferTasksData>(row.data).map(TaskRecord::from)
        }
    };
    record.map_err(ProjectRepositoryError::persistence)
}

pub(super) fn key_contacts_to_row(key_contacts: &KeyContacts) -> KeyContactsRow {
    let contact = |role| key_contacts.contact(role).map(ContactId::into_inner);
    KeyContactsRow {
        id: key_contacts.id().into_inner(),
        project_id: key_contacts.project_id().into_inner(),
        headteacher_id: contact(KeyContactRole::Headteacher),
        chair_of_governors_id: contact(KeyContactRole::ChairOfGovernors),
        incoming_trust_ceo_id: contact(KeyContactRole::IncomingTrustCeo),
        outgoing_trust_ceo_id: contact(KeyContactRole::OutgoingTrustCeo),
        created_at: key_contacts.created_at(),
        updated_at: key_contacts.updated_at(),
    }
}

pub(super) fn row_to_key_contacts(row: KeyContactsRow) -> KeyContacts {
    KeyContacts::from_persisted(PersistedKeyContactsData {
        id: KeyContactId::from_uuid(row.id),
        project_id: ProjectId::from_uuid(row.project_id),
        headteacher_id: row.headteacher_id.map(ContactId::from_uuid),
        chair_of_governors_id: row.chair_of_governors_id.map(ContactId::from_uuid),
        incoming_trust_ceo_id: row.incoming_trust_ceo_id.map(ContactId::from_uuid),
        outgoing_trust_ceo_id: row.outgoing_trust_ceo_id.map(ContactId::from_uuid),
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

pub(super) fn note_to_row(note: &Note) -> NoteRow {
    let notable = note.notable();
    NoteRow {
        id: note.id().into_inner(),
        project_id: note.project_id().into_inner(),
        user_id: note.user_id().into_inner(),
        body: note.body().to_owned(),
        task_identifier: note
            .task_identifier()
            .map(|identifier| identifier.as_str().to_owned()),
        notable_type: notable.map(|target| target.notable_type.as_str().to_owned()),
        notable_id: notable.map(|target| target.notable_id),
        created_at: note.created_at(),
    }
}

pub(super) fn row_to_note(row: NoteRow) -> ProjectRepositoryResult<Note> {
    let task_identifier = row
        .task_identifier
        .as_deref()
        .map(TaskIdentifier::try_from)
        .transpose()
        .map_err(ProjectRepositoryError::persistence)?;
    let notable = match (row.notable_type.as_deref(), row.notable_id) {
        (Some(kind), Some(notable_id)) => Some(Notable {
            notable_type: NotableType::try_from(kind)
                .map_err(ProjectRepositoryError::persistence)?,
            notable_id,
        }),
        _ => None,
    };

    Ok(Note::from_persisted(PersistedNoteData {
        id: NoteId::from_uuid(row.id),
        project_id: ProjectId::from_uuid(row.project_id),
        user_id: UserId::from_uuid(row.user_id),
        body: row.body,
        task_identifier,
        notable,
        created_at: row.created_at,
    }))
}

pub(super) fn revocation_to_rows(
    revocation: &DaoRevocation,
) -> (DaoRevocationRow, Vec<DaoRevocationReasonRow>) {
    let row = DaoRevocationRow {
        id: revocation.id().into_inner(),
        project_id: revocation.project_id().into_inner(),
        decision_makers_name: revocation.decision_makers_name().to_owned(),
        decision_maker_role: revocation.decision_maker_role().as_str().to_owned(),
        date_of_decision: revocation.date_of_decision(),
        created_at: revocation.created_at(),
    };
    let reasons = revocation
        .reasons()
        .iter()
        .map(|reason| DaoRevocationReasonRow {
            id: reason.id.into_inner(),
            dao_revocation_id: reason.dao_revocation_id.into_inner(),
            reason_type: reason.reason_type.as_str().to_owned(),
        })
        .collect();
    (row, reasons)
}

pub(super) fn rows_to_revocation(
    row: DaoRevocationRow,
    reason_rows: Vec<DaoRevocationReasonRow>,
) -> ProjectRepositoryResult<DaoRevocation> {
    let mut reasons = reason_rows
        .into_iter()
        .map(|reason_row| {
            DaoRevokedReason::try_from(reason_row.reason_type.as_str())
                .map(|reason_type| DaoRevocationReason {
                    id: DaoRevocationReasonId::from_uuid(reason_row.id),
                    dao_revocation_id: DaoRevocationId::from_uuid(reason_row.dao_revocation_id),
                    reason_type,
                })
                .map_err(ProjectRepositoryError::persistence)
        })
        .collect::<ProjectRepositoryResult<Vec<_>>>()?;
    reasons.sort_by_key(|reason| reason.reason_type);
    let decision_maker_role = DecisionMakerRole::try_from(row.decision_maker_role.as_str())
        .map_err(ProjectRepositoryError::persistence)?;

    Ok(DaoRevocation::from_persisted(PersistedDaoRevocationData {
        id: DaoRevocationId::from_uuid(row.id),
        project_id: ProjectId::from_uuid(row.project_id),
        decision_maker_role,
        decision_makers_name: row.decision_makers_name,
        date_of_decision: row.date_of_decision,
        reasons,
        created_at: row.created_at,
    }))
}
