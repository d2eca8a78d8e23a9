//! In-memory integration tests for project completion.

use super::helpers::{TestService, active_project, ready_to_complete, service};
use casework::project::{
    checklist::{CompletionBlocker, FormMTask, TaskIdentifier, TaskRecord},
    domain::{NewProject, ProjectDetailsUpdate, ProjectState, ProjectType},
    services::CompletionOutcome,
};
use eyre::{bail, ensure};
use rstest::rstest;

#[rstest]
#[case(ProjectType::Conversion)]
#[case(ProjectType::Transfer)]
#[tokio::test(flavor = "multi_thread")]
async fn fully_settled_project_completes(
    service: TestService,
    #[case] project_type: ProjectType,
) -> eyre::Result<()> {
    let project = ready_to_complete(&service, project_type).await?;

    let outcome = service.complete_project(project.id()).await?;

    let CompletionOutcome::Completed(completed) = outcome else {
        bail!("expected completion, got {outcome:?}");
    };
    ensure!(completed.state() == ProjectState::Completed);
    ensure!(completed.completed_at().is_some());
    let stored = service.get_project(project.id()).await?;
    ensure!(stored == completed);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn single_partly_done_task_is_the_only_blocker(service: TestService) -> eyre::Result<()> {
    let project = ready_to_complete(&service, ProjectType::Transfer).await?;
    let TaskRecord::Transfer(mut data) = service.get_task_data(project.id()).await? else {
        bail!("transfer project must hold a transfer checklist");
    };
    data.form_m = FormMTask {
        received_form_m: true,
        ..FormMTask::default()
    };
    service
        .update_task_data(project.id(), &TaskRecord::Transfer(data))
        .await?;

    let outcome = service.complete_project(project.id()).await?;

    let CompletionOutcome::Blocked(validation) = outcome else {
        bail!("expected a blocked completion, got {outcome:?}");
    };
    ensure!(
        validation.blockers()
            == [CompletionBlocker::IncompleteTask {
                identifier: TaskIdentifier::FormM,
                label: TaskIdentifier::FormM.label(),
            }]
    );
    let stored = service.get_project(project.id()).await?;
    ensure!(stored.state() == ProjectState::Active);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn provisional_date_blocks_an_otherwise_ready_project(
    service: TestService,
) -> eyre::Result<()> {
    let project = ready_to_complete(&service, ProjectType::Conversion).await?;
    service
        .update_project_details(
            project.id(),
            ProjectDetailsUpdate {
                significant_date: Some((project.significant_date(), true)),
                ..ProjectDetailsUpdate::default()
            },
        )
        .await?;

    let outcome = service.complete_project(project.id()).await?;

    let CompletionOutcome::Blocked(validation) = outcome else {
        bail!("expected a blocked completion, got {outcome:?}");
    };
    ensure!(validation.messages() == ["The conversion date must be confirmed"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_list_and_validation_agree_on_hidden_tasks(service: TestService) -> eyre::Result<()> {
    let project = active_project(
        &service,
        NewProject::new(ProjectType::Conversion)
            .with_directive_academy_order()
            .forming_a_mat(),
    )
    .await?;

    let list = service.get_task_list(project.id()).await?;
    let outcome = service.complete_project(project.id()).await?;

    let CompletionOutcome::Blocked(validation) = outcome else {
        bail!("expected a blocked completion, got {outcome:?}");
    };
    let blocked_tasks: Vec<TaskIdentifier> = validation
        .blockers()
        .iter()
        .filter_map(|blocker| match blocker {
            CompletionBlocker::IncompleteTask { identifier, .. } => Some(*identifier),
            _ => None,
        })
        .collect();
    let listed: Vec<TaskIdentifier> = list.iter().map(|entry| entry.identifier).collect();
    ensure!(blocked_tasks == listed);
    ensure!(!blocked_tasks.contains(&TaskIdentifier::ConversionGrant));
    ensure!(!blocked_tasks.contains(&TaskIdentifier::ConfirmIncomingTrustCeoDetails));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_twice_is_a_state_conflict(service: TestService) -> eyre::Result<()> {
    let project = ready_to_complete(&service, ProjectType::Transfer).await?;
    service.complete_project(project.id()).await?;

    let second = service.complete_project(project.id()).await;

    ensure!(second.is_err_and(|err| err.is_state_conflict()));
    Ok(())
}
