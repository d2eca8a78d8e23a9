//! Recording the revocation of a project's directive academy order.

use super::lifecycle::{ProjectLifecycleResult, ProjectLifecycleService};
use crate::project::{
    domain::{
        DaoRevocation, DaoRevocationDecision, NotableType, Note, Project, ProjectEvent, ProjectId,
        UserId,
    },
    ports::{ProjectStore, ProjectUnitOfWork},
};
use mockable::Clock;

/// Request payload for revoking a project's directive academy order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDaoRevocationRequest {
    project_id: ProjectId,
    user_id: UserId,
    decision: DaoRevocationDecision,
}

impl RecordDaoRevocationRequest {
    /// Creates a request recording `decision` on behalf of `user_id`.
    #[must_use]
    pub const fn new(
        project_id: ProjectId,
        user_id: UserId,
        decision: DaoRevocationDecision,
    ) -> Self {
        Self {
            project_id,
            user_id,
            decision,
        }
    }
}

impl<S, C> ProjectLifecycleService<S, C>
where
    S: ProjectStore,
    C: Clock + Send + Sync,
{
    /// Revokes an active project's directive academy order.
    ///
    /// The revocation record, one reason row and one note per reason, and the
    /// transition to `DaoRevoked` are committed as one write.
    ///
    /// # Errors
    ///
    /// Returns a state conflict unless the project is active, or the
    /// decision's validation error when it has no reasons, a blank reason
    /// note, or a blank decision maker's name.
    pub async fn revoke_project(
        &self,
        request: RecordDaoRevocationRequest,
    ) -> ProjectLifecycleResult<Project> {
        let RecordDaoRevocationRequest {
            project_id,
            user_id,
            decision,
        } = request;
        let mut project = self.get_project(project_id).await?;
        project.ensure_permits(ProjectEvent::RevokeDao)?;

        let revocation = DaoRevocation::record(project_id, &decision, &*self.clock)?;
        let notes = reason_notes(&revocation, &decision, user_id, &*self.clock)?;
        let expected = project.state();
        project.revoke_dao(&*self.clock)?;

        let reasons = revocation.reasons().len();
        let unit = ProjectUnitOfWork::new(project, expected)
            .with_notes(notes)
            .with_revocation(revocation);
        self.commit(&unit).await?;
        tracing::info!(
            project_id = %project_id,
            reasons,
            role = decision.decision_maker_role().as_str(),
            "directive academy order revoked"
        );
        Ok(unit.into_project())
    }
}

/// Builds the note explaining each reason row, authored by the recording user.
fn reason_notes(
    revocation: &DaoRevocation,
    decision: &DaoRevocationDecision,
    user_id: UserId,
    clock: &impl Clock,
) -> ProjectLifecycleResult<Vec<Note>> {
    revocation
        .reasons()
        .iter()
        .filter_map(|reason| {
            decision
                .reason_notes()
                .get(&reason.reason_type)
                .map(|body| (reason, body))
        })
        .map(|(reason, body)| {
            Note::new(revocation.project_id(), user_id, body.as_str(), clock)
                .map(|note| {
                    note.with_notable(NotableType::DaoRevocationReason, reason.id.into_inner())
                })
                .map_err(Into::into)
        })
        .collect()
}
