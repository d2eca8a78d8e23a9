//! In-memory integration tests for project handover.

use super::helpers::{TestService, handover_for, service};
use casework::project::{
    checklist::TaskIdentifier,
    domain::{
        HandoverAssignment, NewProject, ProjectDomainError, ProjectState, ProjectTeam,
        ProjectType, SharepointLink, UserId,
    },
    services::ProjectLifecycleError,
};
use eyre::{OptionExt, ensure};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn transfer_without_outgoing_link_stays_inactive(service: TestService) -> eyre::Result<()> {
    let project = service
        .create_project(NewProject::new(ProjectType::Transfer))
        .await?;
    let assignment = HandoverAssignment::new(
        UserId::new(),
        "https://sharepoint.example/establishment",
        "https://sharepoint.example/incoming-trust",
    );

    let result = service.assign_on_handover(project.id(), &assignment).await;

    ensure!(matches!(
        result,
        Err(ProjectLifecycleError::Domain(
            ProjectDomainError::MissingSharepointLink(SharepointLink::OutgoingTrust)
        ))
    ));
    ensure!(service.get_project(project.id()).await?.state() == ProjectState::Inactive);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn handover_to_user_assigns_them(service: TestService) -> eyre::Result<()> {
    let user = UserId::new();
    let project = service
        .create_project(NewProject::new(ProjectType::Transfer))
        .await?;
    let assignment = handover_for(ProjectType::Transfer, user).with_user_team(ProjectTeam::London);

    service.assign_on_handover(project.id(), &assignment).await?;

    let stored = service.get_project(project.id()).await?;
    ensure!(stored.state() == ProjectState::Active);
    ensure!(stored.assigned_to() == Some(user));
    ensure!(stored.team() == Some(ProjectTeam::London));
    ensure!(stored.sharepoint_link(SharepointLink::OutgoingTrust).is_some());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn caseworker_comments_become_a_handover_note(service: TestService) -> eyre::Result<()> {
    let user = UserId::new();
    let project = service
        .create_project(NewProject::new(ProjectType::Conversion))
        .await?;
    let assignment = handover_for(ProjectType::Conversion, user)
        .to_caseworker_team(Some("Trust needs a chase on the lease".to_owned()));

    service.assign_on_handover(project.id(), &assignment).await?;

    let stored = service.get_project(project.id()).await?;
    ensure!(stored.team() == Some(ProjectTeam::RegionalCaseworkerServices));
    ensure!(stored.assigned_to().is_none());
    let notes = service.get_notes(project.id()).await?;
    let note = notes.first().ok_or_eyre("handover note should exist")?;
    ensure!(notes.len() == 1);
    ensure!(note.task_identifier() == Some(TaskIdentifier::Handover));
    ensure!(note.body() == "Trust needs a chase on the lease");
    Ok(())
}
