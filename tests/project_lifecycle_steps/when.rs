//! When steps for project lifecycle BDD scenarios.

use super::world::{ProjectLifecycleWorld, run_async};
use casework::project::{
    domain::{DaoRevocationDecision, DaoRevokedReason, DecisionMakerRole, UserId},
    services::{CompletionOutcome, RecordDaoRevocationRequest},
};
use chrono::NaiveDate;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the project is completed")]
fn complete_project(world: &mut ProjectLifecycleWorld) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let result = run_async(world.service.complete_project(project_id));
    if let Ok(CompletionOutcome::Completed(ref completed)) = result {
        world.project = Some(completed.clone());
    }
    world.completion_result = Some(result);
    Ok(())
}

#[when(r#"the academy order is revoked because "{reason}" with note "{note}""#)]
fn revoke_academy_order(
    world: &mut ProjectLifecycleWorld,
    reason: String,
    note: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let reason_type = DaoRevokedReason::try_from(reason.as_str())
        .map_err(|err| eyre::eyre!("invalid reason in scenario: {err}"))?;
    let date = NaiveDate::from_ymd_opt(2026, 10, 1)
        .ok_or_else(|| eyre::eyre!("invalid decision date"))?;
    let decision = DaoRevocationDecision::new(DecisionMakerRole::Minister, "Minister", date)
        .with_reason(reason_type, note);
    let revoked = run_async(world.service.revoke_project(RecordDaoRevocationRequest::new(
        project_id,
        UserId::new(),
        decision,
    )))
    .wrap_err("revoke the academy order")?;
    world.project = Some(revoked);
    Ok(())
}
