use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Inspect a task board and manage display settings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to the config directory)
    #[arg(long, global = true, value_name = "FILE", env = "TASKBOARD_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Config file (defaults to <config dir>/taskboard/config.toml)
    #[arg(long, global = true, value_name = "FILE", env = "TASKBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON array of board actions to replay before running the command
    #[arg(long, global = true, value_name = "FILE")]
    pub actions: Option<PathBuf>,

    /// Start from an empty board instead of the sample data
    #[arg(long, global = true)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the board column by column
    Board(FilterArgs),
    /// Task operations
    Tasks(TasksCommand),
    /// List the tag catalog
    Tags,
    /// Print board statistics
    Stats,
    /// Display settings
    Settings(SettingsCommand),
}

/// Filters shared by the board and list views.
#[derive(Args, Default)]
pub struct FilterArgs {
    /// Case-insensitive text search over titles, descriptions, tags and subtasks
    #[arg(long)]
    pub search: Option<String>,
    /// Priority to include (repeatable)
    #[arg(long = "priority")]
    pub priorities: Vec<String>,
    /// Tag name to include (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Due date bucket: today, this-week, overdue or no-date
    #[arg(long)]
    pub due: Option<String>,
    #[arg(long)]
    pub assignee: Option<String>,
}

#[derive(Args)]
pub struct TasksCommand {
    #[command(subcommand)]
    pub action: TasksAction,
}

#[derive(Subcommand)]
pub enum TasksAction {
    /// List tasks, highest priority first
    List(FilterArgs),
    /// Get a specific task
    Get {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the saved settings
    Show,
    /// Change one or more settings
    Set(SettingsSetArgs),
    /// Restore the defaults
    Reset,
}

#[derive(Args)]
pub struct SettingsSetArgs {
    /// light, dark or system
    #[arg(long)]
    pub theme: Option<String>,
    #[arg(long, action = clap::ArgAction::Set)]
    pub compact_view: Option<bool>,
    #[arg(long, action = clap::ArgAction::Set)]
    pub show_completed_tasks: Option<bool>,
    /// board or list
    #[arg(long)]
    pub default_task_view: Option<String>,
    #[arg(long, action = clap::ArgAction::Set)]
    pub notifications: Option<bool>,
}
