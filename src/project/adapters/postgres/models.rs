//! Diesel row models for project persistence.

use super::schema::{
    dao_revocation_reasons, dao_revocations, key_contacts, notes, projects, tasks_data,
};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

/// Query and insert row for projects.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: Uuid,
    /// Project type.
    pub project_type: String,
    /// Lifecycle state.
    pub state: String,
    /// Conversion or transfer date.
    pub significant_date: Option<NaiveDate>,
    /// Whether the significant date is provisional.
    pub significant_date_provisional: bool,
    /// Checklist record identifier.
    pub tasks_data_id: Uuid,
    /// Checklist record shape.
    pub tasks_data_type: String,
    /// Forming a new multi-academy trust.
    pub form_a_mat: bool,
    /// Directive academy order in force.
    pub directive_academy_order: bool,
    /// All academy order conditions met.
    pub all_conditions_met: Option<bool>,
    /// Main contact.
    pub main_contact_id: Option<Uuid>,
    /// Two "requires improvement" judgements.
    pub two_requires_improvement: Option<bool>,
    /// Owning team.
    pub team: Option<String>,
    /// Assigned user.
    pub assigned_to: Option<Uuid>,
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
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Write counter.
    pub version: i64,
}

/// Mutable project columns written by a commit.
///
/// `None` clears a column rather than leaving it untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = projects)]
#[diesel(treat_none_as_null = true)]
pub struct ProjectChangeset {
    /// Lifecycle state.
    pub state: String,
    /// Conversion or transfer date.
    pub significant_date: Option<NaiveDate>,
    /// Whether the significant date is provisional.
    pub significant_date_provisional: bool,
    /// All academy order conditions met.
    pub all_conditions_met: Option<bool>,
    /// Main contact.
    pub main_contact_id: Option<Uuid>,
    /// Two "requires improvement" judgements.
    pub two_requires_improvement: Option<bool>,
    /// Owning team.
    pub team: Option<String>,
    /// Assigned user.
    pub assigned_to: Option<Uuid>,
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
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Write counter.
    pub version: i64,
}

/// Query and insert row for checklist records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = tasks_data)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskDataRow {
    /// Record identifier.
    pub id: Uuid,
    /// Record shape.
    pub tasks_data_type: String,
    /// Checklist fields.
    pub data: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query and insert row for key contacts.
#[derive(Debug, Clone, Copy, Queryable, Selectable, Insertable)]
#[diesel(table_name = key_contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct KeyContactsRow {
    /// Record identifier.
    pub id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// Headteacher contact.
    pub headteacher_id: Option<Uuid>,
    /// Chair of governors contact.
    pub chair_of_governors_id: Option<Uuid>,
    /// Incoming trust CEO contact.
    pub incoming_trust_ceo_id: Option<Uuid>,
    /// Outgoing trust CEO contact.
    pub outgoing_trust_ceo_id: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query and insert row for notes.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = notes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NoteRow {
    /// Note identifier.
    pub id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// Author.
    pub user_id: Uuid,
    /// Free-text body.
    pub body: String,
    /// Checklist task.
    pub task_identifier: Option<String>,
    /// Kind of record the note explains.
    pub notable_type: Option<String>,
    /// Identifier of the record the note explains.
    pub notable_id: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query and insert row for revocations.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = dao_revocations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DaoRevocationRow {
    /// Revocation identifier.
    pub id: Uuid,
    /// Revoked project.
    pub project_id: Uuid,
    /// Decision maker's name.
    pub decision_makers_name: String,
    /// Decision maker's role.
    pub decision_maker_role: String,
    /// Decision date.
    pub date_of_decision: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query and insert row for revocation reasons.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = dao_revocation_reasons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DaoRevocationReasonRow {
    /// Reason row identifier.
    pub id: Uuid,
    /// Owning revocation.
    pub dao_revocation_id: Uuid,
    /// Reason code.
    pub reason_type: String,
}
