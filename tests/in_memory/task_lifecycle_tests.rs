//! In-memory integration tests for task lifecycle operations.

use super::helpers::{Harness, frozen_now, harness};
use chrono::TimeDelta;
use eyre::{OptionExt, Result};
use rstest::rstest;
use std::sync::Arc;
use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Priority, Status, Task, TaskId},
    ports::TaskRepository,
    services::TaskServiceError,
    validation::TaskValidationError,
};

#[rstest]
fn created_task_round_trips_through_the_service(harness: Harness) -> Result<()> {
    let due = frozen_now() + TimeDelta::days(3);
    let created = harness.tasks.create_task(
        Task::new("Implement authentication", &harness.clock)
            .with_description("Login with JWT")
            .with_priority(Priority::High)
            .with_due_date(due),
    )?;
    let id = created.id().ok_or_eyre("created task should have an identity")?;

    let found = harness
        .tasks
        .get_task_by_id(id)?
        .ok_or_eyre("created task should be retrievable")?;

    assert_eq!(found, created);
    assert_eq!(found.created_at(), frozen_now());
    assert_eq!(found.due_date(), Some(due));
    Ok(())
}

#[rstest]
fn complete_lifecycle_from_pending_to_completed(harness: Harness) -> Result<()> {
    let created = harness.tasks.create_task(
        Task::new("Migrate billing", &harness.clock).with_completion_percentage(20),
    )?;
    let id = created.id().ok_or_eyre("created task should have an identity")?;

    let started = harness.tasks.update_status(id, Status::InProgress)?;
    assert_eq!(started.completion_percentage().value(), 20);

    let blocked = harness.tasks.update_status(id, Status::Blocked)?;
    assert_eq!(blocked.status(), Status::Blocked);

    harness.tasks.update_priority(id, Priority::Critical)?;
    let done = harness.tasks.update_status(id, Status::Completed)?;

    assert_eq!(done.status(), Status::Completed);
    assert_eq!(done.priority(), Priority::Critical);
    assert_eq!(done.completion_percentage().value(), 100);
    assert_eq!(done.updated_at(), Some(frozen_now()));
    assert_eq!(harness.tasks.get_completion_rate()?, 100);
    Ok(())
}

#[rstest]
fn plain_update_ignores_unknown_identity_but_transitions_do_not(harness: Harness) -> Result<()> {
    let elsewhere = InMemoryTaskRepository::with_clock(Arc::new(harness.clock));
    let mut ghost = elsewhere.save(Task::new("Ghost", &harness.clock))?;
    let ghost_id = ghost.id().ok_or_eyre("ghost should have an identity")?;
    harness.task_repo.update(&mut ghost)?;
    assert!(harness.task_repo.is_empty()?);
    assert_eq!(ghost.updated_at(), None);

    let status = harness.tasks.update_status(ghost_id, Status::Completed);
    let priority = harness.tasks.update_priority(ghost_id, Priority::High);

    assert!(matches!(status, Err(TaskServiceError::NotFound(_))));
    assert!(matches!(priority, Err(TaskServiceError::NotFound(_))));
    Ok(())
}

#[rstest]
#[case(2, false)]
#[case(3, true)]
#[case(255, true)]
#[case(256, false)]
fn title_length_gate(
    harness: Harness,
    #[case] length: usize,
    #[case] accepted: bool,
) -> Result<()> {
    let result = harness
        .tasks
        .create_task(Task::new("t".repeat(length), &harness.clock));

    match result {
        Ok(task) => {
            assert!(accepted);
            assert!(task.id().is_some());
        }
        Err(err) => {
            assert!(!accepted);
            assert!(matches!(
                err,
                TaskServiceError::Validation(TaskValidationError::InvalidTitle { min: 3, max: 255 })
            ));
            assert!(harness.task_repo.is_empty()?);
        }
    }
    Ok(())
}

#[rstest]
fn statistics_follow_the_backlog(harness: Harness) -> Result<()> {
    for (title, percent) in [("Fifty", 50), ("Hundred", 100), ("Seventy five", 75)] {
        harness
            .tasks
            .create_task(Task::new(title, &harness.clock).with_completion_percentage(percent))?;
    }

    assert_eq!(harness.tasks.get_average_completion_percentage()?, 75);
    assert_eq!(harness.tasks.get_completion_rate()?, 0);

    harness.tasks.update_status(TaskId::new(2), Status::Completed)?;
    assert_eq!(harness.tasks.get_completion_rate()?, 33);

    harness.tasks.delete_task(TaskId::new(2))?;
    assert_eq!(harness.tasks.get_average_completion_percentage()?, 62);
    assert_eq!(harness.tasks.get_completion_rate()?, 0);
    Ok(())
}

#[rstest]
fn tasks_carried_over_from_another_store_keep_their_identity(harness: Harness) -> Result<()> {
    let elsewhere = InMemoryTaskRepository::with_clock(Arc::new(harness.clock));
    elsewhere.save(Task::new("Archived", &harness.clock))?;
    let carried = elsewhere.save(Task::new("Carried over", &harness.clock))?;
    harness.task_repo.save(carried)?;

    let first = harness
        .tasks
        .create_task(Task::new("Fresh one", &harness.clock))?;
    let second = harness
        .tasks
        .create_task(Task::new("Fresh two", &harness.clock))?;

    assert_eq!(first.id(), Some(TaskId::new(3)));
    assert_eq!(second.id(), Some(TaskId::new(4)));
    let mut titles: Vec<String> = harness
        .tasks
        .get_all_tasks()?
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    titles.sort();
    assert_eq!(titles, vec!["Carried over", "Fresh one", "Fresh two"]);
    Ok(())
}
