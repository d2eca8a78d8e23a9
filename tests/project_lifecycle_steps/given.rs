//! Given steps for project lifecycle BDD scenarios.

use super::{
    helpers::{active_project, ready_to_complete},
    world::{ProjectLifecycleWorld, run_async},
};
use casework::project::{
    checklist::{FormMTask, TaskRecord},
    domain::{NewProject, ProjectType},
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an active transfer project with every task settled")]
fn settled_transfer_project(world: &mut ProjectLifecycleWorld) -> Result<(), eyre::Report> {
    let project = run_async(ready_to_complete(&world.service, ProjectType::Transfer))
        .wrap_err("set up a settled transfer project")?;
    world.project = Some(project);
    Ok(())
}

#[given("an active sponsored conversion project")]
fn sponsored_conversion_project(world: &mut ProjectLifecycleWorld) -> Result<(), eyre::Report> {
    let request = NewProject::new(ProjectType::Conversion).with_directive_academy_order();
    let project = run_async(active_project(&world.service, request))
        .wrap_err("set up a sponsored conversion project")?;
    world.project = Some(project);
    Ok(())
}

#[given("only the form M has been received")]
fn form_m_only_received(world: &mut ProjectLifecycleWorld) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let record = run_async(world.service.get_task_data(project_id))
        .wrap_err("load the transfer checklist")?;
    let TaskRecord::Transfer(mut data) = record else {
        return Err(eyre::eyre!("expected a transfer checklist, got {record:?}"));
    };
    data.form_m = FormMTask {
        received_form_m: true,
        ..FormMTask::default()
    };
    run_async(
        world
            .service
            .update_task_data(project_id, &TaskRecord::Transfer(data)),
    )
    .wrap_err("store the partly done checklist")?;
    Ok(())
}

#[given("the project has been deleted")]
fn project_deleted(world: &mut ProjectLifecycleWorld) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let deleted = run_async(world.service.delete_project(project_id))
        .wrap_err("delete the project")?;
    world.project = Some(deleted);
    Ok(())
}
