//! Shared world state for project lifecycle BDD scenarios.

use super::helpers::{TestService, service};
use casework::project::{
    domain::Project,
    services::{CompletionOutcome, ProjectLifecycleResult},
};
use rstest::fixture;

/// Scenario world for project lifecycle behaviour tests.
pub struct ProjectLifecycleWorld {
    pub service: TestService,
    pub project: Option<Project>,
    pub completion_result: Option<ProjectLifecycleResult<CompletionOutcome>>,
}

impl ProjectLifecycleWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: service(),
            project: None,
            completion_result: None,
        }
    }

    /// Returns the project the scenario is working on.
    ///
    /// # Errors
    ///
    /// Returns an error when no project has been set up yet.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }
}

impl Default for ProjectLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectLifecycleWorld {
    ProjectLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
