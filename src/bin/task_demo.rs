//! Walks through a small task backlog and logs the results.
//!
//! Usage:
//!
//! ```text
//! RUST_LOG=tasktrack=debug task_demo
//! ```
//!
//! Creates two users and two tasks, then logs per-priority counts, a
//! keyword search, and the aggregate statistics as JSON.

use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tasktrack::directory::{adapters::memory::InMemoryUserRepository, services::UserService};
use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Priority, Task, TaskSearchFilter, add_days, format_date},
    services::TaskService,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasktrack=info,task_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let clock = Arc::new(DefaultClock);
    let users = UserService::new(Arc::new(InMemoryUserRepository::new()));
    let tasks = TaskService::new(Arc::new(InMemoryTaskRepository::new()), Arc::clone(&clock));

    let joao = users.create_user("João Silva", "joao@example.com", "Development")?;
    let maria = users.create_user("Maria Santos", "maria@example.com", "Management")?;

    let now = clock.utc();
    let mut backlog = Vec::new();
    for (user, title, description, priority, days) in [
        (&joao, "Implement authentication", "Login with JWT", Priority::High, 3),
        (&maria, "Review code", "Code review of the endpoints", Priority::Medium, 5),
    ] {
        let mut task = Task::new(title, &*clock)
            .with_description(description)
            .with_priority(priority)
            .with_due_date(add_days(now, days));
        task.set_assignee(user.id());
        backlog.push(tasks.create_task(task)?);
    }

    for task in &backlog {
        let due = task.due_date().map(format_date).unwrap_or_default();
        let assignee = users
            .assignee_of(task)?
            .map(|user| user.name().to_owned())
            .unwrap_or_default();
        info!(title = task.title(), %assignee, %due, "task scheduled");
    }

    info!(total = users.get_all_users()?.len(), "users");
    info!(total = tasks.get_all_tasks()?.len(), "tasks");
    info!(
        total = tasks.get_tasks_by_priority(Priority::High)?.len(),
        "high priority tasks"
    );
    info!(
        total = tasks
            .search_tasks(&TaskSearchFilter::for_keyword("review"))?
            .len(),
        "tasks mentioning review"
    );
    info!(
        statistics = %serde_json::to_string(&tasks.statistics()?)?,
        "backlog statistics"
    );
    Ok(())
}
