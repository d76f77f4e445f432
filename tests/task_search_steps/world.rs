//! Shared world state for task search BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use tasktrack::directory::{
    adapters::memory::InMemoryUserRepository, domain::UserId, services::UserService,
};
use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskService, TaskServiceError},
};

/// Clock pinned to the scenario's reference instant.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioClock(pub DateTime<Utc>);

impl Clock for ScenarioClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository<ScenarioClock>, ScenarioClock>;

/// Scenario world for task search behaviour tests.
pub struct TaskSearchWorld {
    /// Clock shared by the world and the task service.
    pub clock: ScenarioClock,
    /// Task service under test.
    pub tasks: TestTaskService,
    /// User directory backing assignee lookups.
    pub users: UserService<InMemoryUserRepository>,
    /// Users registered during the scenario, keyed by name.
    pub user_ids: HashMap<String, UserId>,
    /// Result of the last search.
    pub last_search: Option<Vec<Task>>,
    /// Result of the last creation attempt.
    pub last_create_result: Option<Result<Task, TaskServiceError>>,
}

impl TaskSearchWorld {
    /// Creates a world with empty stores and a pinned clock.
    #[must_use]
    pub fn new() -> Self {
        let clock = ScenarioClock(scenario_now());
        let repository = InMemoryTaskRepository::with_clock(Arc::new(clock));
        Self {
            clock,
            tasks: TaskService::new(Arc::new(repository), Arc::new(clock)),
            users: UserService::new(Arc::new(InMemoryUserRepository::new())),
            user_ids: HashMap::new(),
            last_search: None,
            last_create_result: None,
        }
    }

    /// Looks up a user registered earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no user with that name was registered.
    pub fn user_id(&self, name: &str) -> Result<UserId, eyre::Report> {
        self.user_ids
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("no user named '{name}' in scenario world"))
    }
}

impl Default for TaskSearchWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the instant scenario clocks are pinned to.
///
/// # Panics
///
/// Panics if the hard-coded timestamp is invalid.
pub fn scenario_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0)
        .single()
        .expect("valid scenario timestamp")
}

/// Provides a fresh world for each scenario.
#[fixture]
pub fn world() -> TaskSearchWorld {
    TaskSearchWorld::new()
}
