mod cli;
mod context;
mod handlers;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        // stdout carries the JSON envelope
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::output_error(&format!("{:#}", e));
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut ctx = CliContext::load(&cli).await?;

    match cli.command {
        Commands::Board(args) => handlers::board::handle(&mut ctx, args),
        Commands::Tasks(tasks_cmd) => handlers::tasks::handle(&mut ctx, tasks_cmd.action),
        Commands::Tags => output::output_list(ctx.store.available_tags().to_vec()),
        Commands::Stats => handlers::stats::handle(&ctx),
        Commands::Settings(settings_cmd) => {
            handlers::settings::handle(&ctx, settings_cmd.action).await
        }
    }
}
