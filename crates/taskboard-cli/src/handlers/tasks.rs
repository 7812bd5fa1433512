use crate::cli::TasksAction;
use crate::context::CliContext;
use crate::output;
use taskboard_domain::{sort_for_list, Task};

pub fn handle(ctx: &mut CliContext, action: TasksAction) -> anyhow::Result<()> {
    match action {
        TasksAction::List(args) => {
            let filter = ctx.build_filter(&args)?;
            ctx.store.set_filter(filter);

            let visible = ctx.store.filtered_tasks();
            let mut tasks: Vec<&Task> = visible.values().collect();
            sort_for_list(&mut tasks);
            output::output_list(tasks)
        }
        TasksAction::Get { id } => {
            let state = ctx.store.state();
            output::output_success(state.require_task(id)?)
        }
    }
}
