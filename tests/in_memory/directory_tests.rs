//! In-memory integration tests for users and categories referenced by tasks.

use super::helpers::{Harness, harness};
use eyre::{OptionExt, Result};
use rstest::rstest;
use tasktrack::directory::{
    domain::Category,
    ports::CategoryRepository,
    services::UserServiceError,
};
use tasktrack::task::domain::{Task, TaskSearchFilter};

#[rstest]
fn tasks_resolve_assignee_and_category_on_demand(harness: Harness) -> Result<()> {
    let user = harness
        .users
        .create_user("Carla", "carla@example.com", "Support")?;
    let user_id = user.id().ok_or_eyre("user should have an identity")?;
    let category = harness.categories.save(Category::new("Support"))?;
    let category_id = category.id().ok_or_eyre("category should have an identity")?;

    let task = harness.tasks.create_task(
        Task::new("Answer tickets", &harness.clock)
            .with_assignee(user_id)
            .with_category(category_id),
    )?;

    let mut edited = category;
    edited.set_name("Customer Support");
    harness.categories.update(&edited)?;
    harness.users.deactivate_user(user_id)?;

    let assignee = harness
        .users
        .assignee_of(&task)?
        .ok_or_eyre("assignee should resolve")?;
    assert!(!assignee.is_active());
    let resolved = harness
        .categories
        .find_by_id(category_id)?
        .ok_or_eyre("category should resolve")?;
    assert_eq!(resolved.name(), "Customer Support");
    Ok(())
}

#[rstest]
fn deleting_a_user_leaves_tasks_untouched(harness: Harness) -> Result<()> {
    let user_id = harness
        .users
        .create_user("Davi", "davi@example.com", "Ops")?
        .id()
        .ok_or_eyre("user should have an identity")?;
    harness
        .tasks
        .create_task(Task::new("Rotate on-call", &harness.clock).with_assignee(user_id))?;

    harness.users.delete_user(user_id)?;

    let still_assigned = harness
        .tasks
        .search_tasks(&TaskSearchFilter::new().with_assignee(user_id))?;
    assert_eq!(still_assigned.len(), 1);
    Ok(())
}

#[rstest]
fn email_uniqueness_spans_the_directory(harness: Harness) -> Result<()> {
    harness
        .users
        .create_user("Eva", "eva@example.com", "Finance")?;
    let duplicate = harness
        .users
        .create_user("Eva Two", "Eva@Example.com", "Finance");

    assert!(matches!(duplicate, Err(UserServiceError::DuplicateEmail(_))));
    assert_eq!(harness.users.get_all_users()?.len(), 1);
    Ok(())
}
