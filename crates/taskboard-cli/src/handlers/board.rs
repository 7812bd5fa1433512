use crate::cli::FilterArgs;
use crate::context::CliContext;
use crate::output;
use serde::Serialize;
use taskboard_domain::{column_tasks, Task, TaskStatus};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ColumnView<'a> {
    id: TaskStatus,
    title: &'a str,
    tasks: Vec<&'a Task>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BoardView<'a> {
    columns: Vec<ColumnView<'a>>,
    visible_tasks: usize,
    total_tasks: usize,
}

pub fn handle(ctx: &mut CliContext, args: FilterArgs) -> anyhow::Result<()> {
    let filter = ctx.build_filter(&args)?;
    ctx.store.set_filter(filter);

    let state = ctx.store.state();
    let visible = ctx.store.filtered_tasks();
    let columns = state
        .ordered_columns()
        .map(|column| ColumnView {
            id: column.id,
            title: &column.title,
            tasks: column_tasks(&state, &visible, column.id),
        })
        .collect();

    output::output_success(BoardView {
        columns,
        visible_tasks: visible.len(),
        total_tasks: state.task_count(),
    })
}
