//! Then steps for project lifecycle BDD scenarios.

use super::world::{ProjectLifecycleWorld, run_async};
use casework::project::{domain::ProjectState, services::CompletionOutcome};
use rstest_bdd_macros::then;

#[then(r#"the project state is "{state}""#)]
fn project_state_is(world: &ProjectLifecycleWorld, state: String) -> Result<(), eyre::Report> {
    let expected_state = ProjectState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid expected state in scenario: {err}"))?;
    let project_id = world.project()?.id();
    let stored = run_async(world.service.get_project(project_id))?;

    if stored.state() != expected_state {
        return Err(eyre::eyre!(
            "expected state {}, found {}",
            expected_state.as_str(),
            stored.state().as_str()
        ));
    }
    Ok(())
}

#[then("the completion succeeds")]
fn completion_succeeds(world: &ProjectLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .completion_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing completion result"))?;

    if !matches!(result, Ok(CompletionOutcome::Completed(_))) {
        return Err(eyre::eyre!("expected a completed project, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the completion is blocked by "{message}""#)]
fn completion_blocked_by(world: &ProjectLifecycleWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .completion_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing completion result"))?;

    let Ok(CompletionOutcome::Blocked(validation)) = result else {
        return Err(eyre::eyre!("expected a blocked completion, got {result:?}"));
    };
    let messages = validation.messages();
    if messages != [message.clone()] {
        return Err(eyre::eyre!(
            "expected only {message:?}, got {messages:?}"
        ));
    }
    Ok(())
}

#[then("the completion fails with a state conflict")]
fn completion_fails_with_state_conflict(
    world: &ProjectLifecycleWorld,
) -> Result<(), eyre::Report> {
    let result = world
        .completion_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing completion result"))?;

    if !result.as_ref().is_err_and(|err| err.is_state_conflict()) {
        return Err(eyre::eyre!("expected a state conflict, got {result:?}"));
    }
    Ok(())
}

#[then("one revocation with {count:usize} reason is recorded")]
fn revocation_recorded(world: &ProjectLifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let revocation = run_async(world.service.get_dao_revocation(project_id))?
        .ok_or_else(|| eyre::eyre!("no revocation stored"))?;

    if revocation.reasons().len() != count {
        return Err(eyre::eyre!(
            "expected {count} reason rows, found {}",
            revocation.reasons().len()
        ));
    }
    Ok(())
}

#[then(r#"the project has a note reading "{body}""#)]
fn project_has_note(world: &ProjectLifecycleWorld, body: String) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let notes = run_async(world.service.get_notes(project_id))?;

    if !notes.iter().any(|note| note.body() == body) {
        return Err(eyre::eyre!("no note with body {body:?} among {notes:?}"));
    }
    Ok(())
}
