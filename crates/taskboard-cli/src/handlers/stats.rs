use crate::context::CliContext;
use crate::output;
use serde::Serialize;
use taskboard_domain::TaskStatistics;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsView {
    #[serde(flatten)]
    statistics: TaskStatistics,
    completion_rate: u32,
}

pub fn handle(ctx: &CliContext) -> anyhow::Result<()> {
    let statistics = ctx.store.statistics();
    let completion_rate = statistics.completion_rate();
    output::output_success(StatsView {
        statistics,
        completion_rate,
    })
}
