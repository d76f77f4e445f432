//! When steps for task search BDD scenarios.

use super::world::TaskSearchWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasktrack::task::domain::{Priority, Task, TaskSearchFilter};

#[when(r#"I search for "{priority}" priority tasks"#)]
fn search_by_priority(world: &mut TaskSearchWorld, priority: String) -> Result<(), eyre::Report> {
    let filter = TaskSearchFilter::new().with_priority(Priority::try_from(priority.as_str())?);
    let found = world
        .tasks
        .search_tasks(&filter)
        .wrap_err("search by priority")?;
    world.last_search = Some(found);
    Ok(())
}

#[when(r#"I search for "{priority}" priority tasks assigned to "{assignee}""#)]
fn search_by_priority_and_assignee(
    world: &mut TaskSearchWorld,
    priority: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let filter = TaskSearchFilter::new()
        .with_priority(Priority::try_from(priority.as_str())?)
        .with_assignee(world.user_id(&assignee)?);
    let found = world
        .tasks
        .search_tasks(&filter)
        .wrap_err("search by priority and assignee")?;
    world.last_search = Some(found);
    Ok(())
}

#[when("I search for overdue tasks")]
fn search_overdue(world: &mut TaskSearchWorld) -> Result<(), eyre::Report> {
    let filter = TaskSearchFilter::new().with_overdue_only(true);
    let found = world
        .tasks
        .search_tasks(&filter)
        .wrap_err("search overdue tasks")?;
    world.last_search = Some(found);
    Ok(())
}

#[when(r#"I create a task titled "{title}""#)]
fn create_titled_task(world: &mut TaskSearchWorld, title: String) {
    let task = Task::new(title, &world.clock);
    world.last_create_result = Some(world.tasks.create_task(task));
}
