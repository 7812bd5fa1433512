use anyhow::Context;
use chrono::Local;
use std::path::{Path, PathBuf};
use taskboard_core::{AppConfig, Clock, SystemClock};
use taskboard_domain::{
    sample_board, sample_tags, BoardStore, DueDateFilter, StatisticsWindow, TaskAction,
    TaskFilter, TaskPriority,
};
use taskboard_persistence::JsonFileSettingsStore;

use crate::cli::{Cli, FilterArgs};

pub struct CliContext {
    pub store: BoardStore,
    settings_path: Option<PathBuf>,
}

impl CliContext {
    pub async fn load(cli: &Cli) -> anyhow::Result<Self> {
        let config = match &cli.config {
            Some(path) => AppConfig::load_from(path)
                .with_context(|| format!("failed to read config {}", path.display()))?,
            None => AppConfig::load(),
        };

        let clock = SystemClock;
        let catalog = sample_tags();
        let store = if cli.empty {
            BoardStore::new(catalog, Box::new(clock))
        } else {
            BoardStore::with_state(sample_board(clock.now()), catalog, Box::new(clock))?
        };
        let mut store = store
            .with_window(StatisticsWindow::from_config(&config)?)
            .with_utc_offset(*Local::now().offset());

        if let Some(path) = &cli.actions {
            replay_actions(&mut store, path).await?;
        }

        let settings_path = cli
            .settings
            .clone()
            .or_else(|| config.effective_settings_path());

        Ok(Self {
            store,
            settings_path,
        })
    }

    pub fn settings_store(&self) -> anyhow::Result<JsonFileSettingsStore> {
        let path = self.settings_path.as_ref().ok_or_else(|| {
            anyhow::anyhow!("No settings location: pass --settings or set TASKBOARD_SETTINGS")
        })?;
        Ok(JsonFileSettingsStore::new(path))
    }

    /// Turn command-line filter flags into a `TaskFilter`, resolving tag names
    /// against the catalog. Without `--search` the replayed search term stays.
    pub fn build_filter(&self, args: &FilterArgs) -> anyhow::Result<TaskFilter> {
        let search = match &args.search {
            Some(term) => term.clone(),
            None => self.store.search_term().to_string(),
        };
        let mut filter = TaskFilter::search(search);

        if !args.priorities.is_empty() {
            let priorities = args
                .priorities
                .iter()
                .map(|p| p.parse::<TaskPriority>())
                .collect::<Result<Vec<_>, _>>()?;
            filter = filter.with_priorities(priorities);
        }

        if !args.tags.is_empty() {
            let catalog = self.store.catalog();
            let tags = args
                .tags
                .iter()
                .map(|name| {
                    catalog
                        .find_by_name(name)
                        .map(|tag| tag.id)
                        .ok_or_else(|| anyhow::anyhow!("Unknown tag: {}", name))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            filter = filter.with_tags(tags);
        }

        if let Some(due) = &args.due {
            filter = filter.with_due_date(due.parse::<DueDateFilter>()?);
        }

        if let Some(assignee) = &args.assignee {
            filter = filter.with_assignee(assignee.clone());
        }

        Ok(filter)
    }
}

async fn replay_actions(store: &mut BoardStore, path: &Path) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read actions from {}", path.display()))?;
    let actions: Vec<TaskAction> = serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not a JSON array of actions", path.display()))?;

    tracing::info!("Replaying {} actions from {}", actions.len(), path.display());
    for (index, action) in actions.into_iter().enumerate() {
        let description = action.description();
        store
            .dispatch(action)
            .with_context(|| format!("Action {} ({}) was rejected", index + 1, description))?;
    }
    Ok(())
}
