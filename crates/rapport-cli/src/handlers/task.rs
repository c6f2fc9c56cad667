use super::index_from_position;
use crate::cli::{TaskAction, TaskUpdateArgs};
use crate::context::CliContext;
use crate::output;
use rapport_domain::{ReportOperations, TaskEntry, TaskUpdate};
use serde::Serialize;

#[derive(Serialize)]
struct PositionedTask {
    position: usize,
    #[serde(flatten)]
    task: TaskEntry,
}

impl PositionedTask {
    fn new(index: usize, task: TaskEntry) -> Self {
        Self {
            position: index + 1,
            task,
        }
    }
}

pub async fn handle(ctx: &mut CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Add { title, description } => {
            let index = ctx.add_task(TaskUpdate { title, description })?;
            ctx.save().await?;
            let task = ctx.report.task(index).cloned().unwrap_or_default();
            output::output_success(PositionedTask::new(index, task))?;
        }
        TaskAction::List => {
            let items = ctx
                .list_tasks()?
                .into_iter()
                .enumerate()
                .map(|(index, task)| PositionedTask::new(index, task))
                .collect();
            output::output_list::<PositionedTask>(items)?;
        }
        TaskAction::Get { position } => {
            let index = index_from_position(position, ctx.report.task_count())?;
            match ctx.get_task(index)? {
                Some(task) => output::output_success(PositionedTask::new(index, task))?,
                None => output::output_error(&format!("Task not found: {}", position)),
            }
        }
        TaskAction::Update(args) => handle_update(ctx, args).await?,
        TaskAction::Remove { position } => {
            let index = index_from_position(position, ctx.report.task_count())?;
            let removed = ctx.remove_task(index)?;
            ctx.save().await?;
            output::output_success(serde_json::json!({
                "removed": position,
                "task": removed,
                "remaining": ctx.report.task_count(),
            }))?;
        }
    }
    Ok(())
}

async fn handle_update(ctx: &mut CliContext, args: TaskUpdateArgs) -> anyhow::Result<()> {
    let index = index_from_position(args.position, ctx.report.task_count())?;
    let update = TaskUpdate {
        title: args.title,
        description: args.description,
    };
    if !update.is_change() {
        anyhow::bail!("Nothing to update: pass --title and/or --description");
    }
    let task = ctx.update_task(index, update)?;
    ctx.save().await?;
    output::output_success(PositionedTask::new(index, task))
}
