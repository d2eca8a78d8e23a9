//! In-memory integration tests for racing transitions.

use super::helpers::{TestService, active_project, ready_to_complete, service};
use casework::project::{
    domain::{
        DaoRevocationDecision, DaoRevokedReason, DecisionMakerRole, NewProject, ProjectState,
        ProjectType, UserId,
    },
    services::RecordDaoRevocationRequest,
};
use chrono::NaiveDate;
use eyre::{OptionExt, ensure};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn only_one_of_racing_completion_and_revocation_lands(
    service: TestService,
) -> eyre::Result<()> {
    let project = ready_to_complete(&service, ProjectType::Conversion).await?;
    let date = NaiveDate::from_ymd_opt(2026, 10, 1).ok_or_eyre("valid decision date")?;
    let decision = DaoRevocationDecision::new(DecisionMakerRole::Minister, "Minister", date)
        .with_reason(DaoRevokedReason::ChangeToGovernmentPolicy, "Policy withdrawn");

    let completing = service.clone();
    let revoking = service.clone();
    let id = project.id();
    let completion = tokio::spawn(async move { completing.complete_project(id).await });
    let revocation = tokio::spawn(async move {
        revoking
            .revoke_project(RecordDaoRevocationRequest::new(id, UserId::new(), decision))
            .await
    });
    let completed = completion.await?;
    let revoked = revocation.await?;

    ensure!(
        completed.is_ok() != revoked.is_ok(),
        "exactly one transition must succeed"
    );
    let stored = service.get_project(id).await?;
    if revoked.is_ok() {
        ensure!(stored.state() == ProjectState::DaoRevoked);
        ensure!(completed.is_err_and(|err| err.is_state_conflict()));
    } else {
        ensure!(stored.state() == ProjectState::Completed);
        ensure!(revoked.is_err_and(|err| err.is_state_conflict()));
        ensure!(service.get_dao_revocation(id).await?.is_none());
        ensure!(service.get_notes(id).await?.is_empty());
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn racing_deletions_leave_one_winner(service: TestService) -> eyre::Result<()> {
    let project = active_project(&service, NewProject::new(ProjectType::Transfer)).await?;
    let id = project.id();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let racer = service.clone();
            tokio::spawn(async move { racer.delete_project(id).await })
        })
        .collect();
    let mut successes = 0_usize;
    for handle in handles {
        match handle.await? {
            Ok(_) => successes += 1,
            Err(err) => ensure!(err.is_state_conflict(), "unexpected error: {err}"),
        }
    }

    ensure!(successes == 1);
    ensure!(service.get_project(id).await?.state() == ProjectState::Deleted);
    Ok(())
}
