//! Then steps for task search BDD scenarios.

use super::world::TaskSearchWorld;
use rstest_bdd_macros::then;
use tasktrack::task::{services::TaskServiceError, validation::TaskValidationError};

#[then("the number of matching tasks is {count:usize}")]
fn matching_count(world: &TaskSearchWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world
        .last_search
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no search has run"))?;
    if found.len() != count {
        return Err(eyre::eyre!(
            "expected {count} matching tasks, found {}",
            found.len()
        ));
    }
    Ok(())
}

#[then(r#"the results include "{title}""#)]
fn results_include(world: &TaskSearchWorld, title: String) -> Result<(), eyre::Report> {
    let found = world
        .last_search
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no search has run"))?;
    if !found.iter().any(|task| task.title() == title) {
        return Err(eyre::eyre!("expected '{title}' among the matching tasks"));
    }
    Ok(())
}

#[then("task creation fails with a title length error")]
fn creation_rejected_for_title(world: &TaskSearchWorld) -> Result<(), eyre::Report> {
    match &world.last_create_result {
        Some(Err(TaskServiceError::Validation(TaskValidationError::InvalidTitle {
            ..
        }))) => Ok(()),
        Some(Err(other)) => Err(eyre::eyre!("unexpected error: {other}")),
        Some(Ok(task)) => Err(eyre::eyre!("task '{}' was accepted", task.title())),
        None => Err(eyre::eyre!("no creation attempt recorded")),
    }
}
