//! In-memory integration tests for task search across users and categories.

use super::helpers::{Harness, frozen_now, harness};
use chrono::TimeDelta;
use eyre::{OptionExt, Result};
use rstest::rstest;
use tasktrack::directory::{domain::Category, ports::CategoryRepository};
use tasktrack::task::domain::{Priority, Status, Task, TaskSearchFilter};

fn sorted_titles(tasks: &[Task]) -> Vec<String> {
    let mut titles: Vec<String> = tasks.iter().map(|task| task.title().to_owned()).collect();
    titles.sort();
    titles
}

#[rstest]
fn priority_and_assignee_filters_compose(harness: Harness) -> Result<()> {
    let ana = harness
        .users
        .create_user("Ana", "ana@example.com", "Engineering")?
        .id()
        .ok_or_eyre("user A should have an identity")?;
    let bruno = harness
        .users
        .create_user("Bruno", "bruno@example.com", "Engineering")?
        .id()
        .ok_or_eyre("user B should have an identity")?;

    for (title, assignee, priority, status) in [
        ("Harden API", ana, Priority::High, Status::InProgress),
        ("Rotate keys", bruno, Priority::High, Status::Pending),
        ("Tidy README", ana, Priority::Low, Status::Completed),
    ] {
        harness.tasks.create_task(
            Task::new(title, &harness.clock)
                .with_assignee(assignee)
                .with_priority(priority)
                .with_status(status),
        )?;
    }

    let high = harness
        .tasks
        .search_tasks(&TaskSearchFilter::new().with_priority(Priority::High))?;
    assert_eq!(sorted_titles(&high), vec!["Harden API", "Rotate keys"]);

    let ana_high = harness.tasks.search_tasks(
        &TaskSearchFilter::new()
            .with_assignee(ana)
            .with_priority(Priority::High),
    )?;
    assert_eq!(sorted_titles(&ana_high), vec!["Harden API"]);
    Ok(())
}

#[rstest]
fn category_keyword_and_overdue_filters_compose(harness: Harness) -> Result<()> {
    let ops = harness
        .categories
        .save(Category::new("Operations"))?
        .id()
        .ok_or_eyre("category should have an identity")?;
    let lapsed = frozen_now() - TimeDelta::hours(2);

    harness.tasks.create_task(
        Task::new("Patch servers", &harness.clock)
            .with_category(ops)
            .with_due_date(lapsed),
    )?;
    harness.tasks.create_task(
        Task::new("Patch laptops", &harness.clock)
            .with_category(ops)
            .with_due_date(frozen_now() + TimeDelta::days(1)),
    )?;
    harness.tasks.create_task(
        Task::new("Patch notes", &harness.clock)
            .with_description("Summarise server fixes")
            .with_due_date(lapsed),
    )?;

    let patched = harness
        .tasks
        .search_tasks(&TaskSearchFilter::for_keyword("SERVER"))?;
    assert_eq!(sorted_titles(&patched), vec!["Patch notes", "Patch servers"]);

    let overdue_ops = harness.tasks.search_tasks(
        &TaskSearchFilter::new()
            .with_category(ops)
            .with_overdue_only(true),
    )?;
    assert_eq!(sorted_titles(&overdue_ops), vec!["Patch servers"]);

    let due_soon = harness.tasks.get_tasks_due_in_next_days(1)?;
    assert_eq!(sorted_titles(&due_soon), vec!["Patch laptops"]);
    Ok(())
}
