//! In-memory integration tests for directive academy order revocation.

use super::helpers::{TestService, active_project, service};
use casework::project::{
    domain::{
        DaoRevocationDecision, DaoRevokedReason, DecisionMakerRole, NewProject, NotableType,
        ProjectDomainError, ProjectState, ProjectType, UserId,
    },
    services::{ProjectLifecycleError, RecordDaoRevocationRequest},
};
use chrono::NaiveDate;
use eyre::{OptionExt, ensure};
use rstest::{fixture, rstest};

#[fixture]
fn decision() -> eyre::Result<DaoRevocationDecision> {
    let date = NaiveDate::from_ymd_opt(2026, 10, 1).ok_or_eyre("valid decision date")?;
    Ok(
        DaoRevocationDecision::new(DecisionMakerRole::Minister, "Minister for Schools", date)
            .with_reason(DaoRevokedReason::SchoolClosedOrClosing, "Closing school"),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn revocation_records_reason_rows_and_notes(
    service: TestService,
    decision: eyre::Result<DaoRevocationDecision>,
) -> eyre::Result<()> {
    let user = UserId::new();
    let project = active_project(
        &service,
        NewProject::new(ProjectType::Conversion).with_directive_academy_order(),
    )
    .await?;

    let revoked = service
        .revoke_project(RecordDaoRevocationRequest::new(project.id(), user, decision?))
        .await?;

    ensure!(revoked.state() == ProjectState::DaoRevoked);
    let revocation = service
        .get_dao_revocation(project.id())
        .await?
        .ok_or_eyre("revocation should be stored")?;
    ensure!(revocation.decision_maker_role() == DecisionMakerRole::Minister);
    ensure!(revocation.reasons().len() == 1);
    let reason = revocation.reasons().first().ok_or_eyre("one reason row")?;
    ensure!(reason.reason_type == DaoRevokedReason::SchoolClosedOrClosing);

    let notes = service.get_notes(project.id()).await?;
    ensure!(notes.len() == 1);
    let note = notes.first().ok_or_eyre("one reason note")?;
    ensure!(note.body() == "Closing school");
    ensure!(note.user_id() == user);
    let notable = note.notable().ok_or_eyre("note should reference the reason")?;
    ensure!(notable.notable_type == NotableType::DaoRevocationReason);
    ensure!(notable.notable_id == reason.id.into_inner());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn one_note_per_reason(
    service: TestService,
    decision: eyre::Result<DaoRevocationDecision>,
) -> eyre::Result<()> {
    let project = active_project(&service, NewProject::new(ProjectType::Conversion)).await?;
    let with_two = decision?
        .with_reason(DaoRevokedReason::ChangeToGovernmentPolicy, "Policy withdrawn");

    service
        .revoke_project(RecordDaoRevocationRequest::new(
            project.id(),
            UserId::new(),
            with_two,
        ))
        .await?;

    let notes = service.get_notes(project.id()).await?;
    let revocation = service
        .get_dao_revocation(project.id())
        .await?
        .ok_or_eyre("revocation should be stored")?;
    ensure!(notes.len() == 2);
    ensure!(revocation.reasons().len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_decision_changes_nothing(service: TestService) -> eyre::Result<()> {
    let project = active_project(&service, NewProject::new(ProjectType::Conversion)).await?;
    let date = NaiveDate::from_ymd_opt(2026, 10, 1).ok_or_eyre("valid decision date")?;
    let no_reasons = DaoRevocationDecision::new(DecisionMakerRole::DirectorGeneral, "DG", date);

    let result = service
        .revoke_project(RecordDaoRevocationRequest::new(
            project.id(),
            UserId::new(),
            no_reasons,
        ))
        .await;

    ensure!(matches!(
        result,
        Err(ProjectLifecycleError::Domain(
            ProjectDomainError::EmptyRevocationReasons
        ))
    ));
    ensure!(service.get_project(project.id()).await?.state() == ProjectState::Active);
    ensure!(service.get_dao_revocation(project.id()).await?.is_none());
    ensure!(service.get_notes(project.id()).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inactive_project_cannot_be_revoked(
    service: TestService,
    decision: eyre::Result<DaoRevocationDecision>,
) -> eyre::Result<()> {
    let project = service
        .create_project(NewProject::new(ProjectType::Conversion))
        .await?;

    let result = service
        .revoke_project(RecordDaoRevocationRequest::new(
            project.id(),
            UserId::new(),
            decision?,
        ))
        .await;

    ensure!(result.is_err_and(|err| err.is_state_conflict()));
    ensure!(service.get_dao_revocation(project.id()).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn revoked_project_cannot_be_completed_or_deleted(
    service: TestService,
    decision: eyre::Result<DaoRevocationDecision>,
) -> eyre::Result<()> {
    let project = active_project(&service, NewProject::new(ProjectType::Conversion)).await?;
    service
        .revoke_project(RecordDaoRevocationRequest::new(
            project.id(),
            UserId::new(),
            decision?,
        ))
        .await?;

    let completion = service.complete_project(project.id()).await;
    let deletion = service.delete_project(project.id()).await;

    ensure!(completion.is_err_and(|err| err.is_state_conflict()));
    ensure!(deletion.is_err_and(|err| err.is_state_conflict()));
    Ok(())
}
