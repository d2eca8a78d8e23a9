//! Diesel schema for project lifecycle persistence.

diesel::table! {
    /// Conversion and transfer projects.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Project type.
        #[max_length = 20]
        project_type -> Varchar,
        /// Lifecycle state.
        #[max_length = 20]
        state -> Varchar,
        /// Conversion or transfer date.
        significant_date -> Nullable<Date>,
        /// Whether the significant date is provisional.
        significant_date_provisional -> Bool,
        /// Checklist record identifier.
        tasks_data_id -> Uuid,
        /// Checklist record shape; always equal to the project type.
        #[max_length = 20]
        tasks_data_type -> Varchar,
        /// Forming a new multi-academy trust.
        form_a_mat -> Bool,
        /// Directive academy order in force.
        directive_academy_order -> Bool,
        /// All academy order conditions met.
        all_conditions_met -> Nullable<Bool>,
        /// Main contact.
        main_contact_id -> Nullable<Uuid>,
        /// Two "requires improvement" judgements.
        two_requires_improvement -> Nullable<Bool>,
        /// Owning team.
        #[max_length = 50]
        team -> Nullable<Varchar>,
        /// Assigned user.
        assigned_to -> Nullable<Uuid>,
        /// Assignment timestamp.
        assigned_at -> Nullable<Timestamptz>,
        /// School or academy sharepoint link.
        establishment_sharepoint_link -> Nullable<Text>,
        /// Incoming trust sharepoint link.
        incoming_trust_sharepoint_link -> Nullable<Text>,
        /// Outgoing trust sharepoint link.
        outgoing_trust_sharepoint_link -> Nullable<Text>,
        /// Completion timestamp.
        completed_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
        /// Write counter guarding concurrent commits.
        version -> Int8,
    }
}

diesel::table! {
    /// Checklist records stored as JSON.
    tasks_data (id) {
        /// Record identifier.
        id -> Uuid,
        /// Record shape.
        #[max_length = 20]
        tasks_data_type -> Varchar,
        /// Checklist fields.
        data -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Key contacts, one row per project.
    key_contacts (id) {
        /// Record identifier.
        id -> Uuid,
        /// Owning project.
        project_id -> Uuid,
        /// Headteacher contact.
        headteacher_id -> Nullable<Uuid>,
        /// Chair of governors contact.
        chair_of_governors_id -> Nullable<Uuid>,
        /// Incoming trust CEO contact.
        incoming_trust_ceo_id -> Nullable<Uuid>,
        /// Outgoing trust CEO contact.
        outgoing_trust_ceo_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only audit notes.
    notes (id) {
        /// Note identifier.
        id -> Uuid,
        /// Owning project.
        project_id -> Uuid,
        /// Author.
        user_id -> Uuid,
        /// Free-text body.
        body -> Text,
        /// Checklist task the note belongs to.
        #[max_length = 100]
        task_identifier -> Nullable<Varchar>,
        /// Kind of record the note explains.
        #[max_length = 50]
        notable_type -> Nullable<Varchar>,
        /// Identifier of the record the note explains.
        notable_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Directive academy order revocations.
    dao_revocations (id) {
        /// Revocation identifier.
        id -> Uuid,
        /// Revoked project.
        project_id -> Uuid,
        /// Decision maker's name.
        decision_makers_name -> Text,
        /// Decision maker's role.
        #[max_length = 50]
        decision_maker_role -> Varchar,
        /// Decision date.
        date_of_decision -> Date,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One row per revocation reason.
    dao_revocation_reasons (id) {
        /// Reason row identifier.
        id -> Uuid,
        /// Owning revocation.
        dao_revocation_id -> Uuid,
        /// Reason code.
        #[max_length = 100]
        reason_type -> Varchar,
    }
}

diesel::joinable!(key_contacts -> projects (project_id));
diesel::joinable!(notes -> projects (project_id));
diesel::joinable!(dao_revocations -> projects (project_id));
diesel::joinable!(dao_revocation_reasons -> dao_revocations (dao_revocation_id));

diesel::allow_tables_to_appear_in_same_query!(
    projects,
    tasks_data,
    key_contacts,
    notes,
    dao_revocations,
    dao_revocation_reasons,
);
