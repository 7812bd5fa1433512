use crate::cli::{SettingsAction, SettingsSetArgs};
use crate::context::CliContext;
use crate::output;
use taskboard_domain::{SettingsUpdate, TaskView, Theme};
use taskboard_persistence::SettingsStore;

pub async fn handle(ctx: &CliContext, action: SettingsAction) -> anyhow::Result<()> {
    let store = ctx.settings_store()?;
    match action {
        SettingsAction::Show => {
            let settings = store.load().await?;
            output::output_success(&settings)
        }
        SettingsAction::Set(args) => {
            let update = build_settings_update(&args)?;
            if update.is_empty() {
                anyhow::bail!("Nothing to update: pass at least one setting");
            }
            let settings = store.update(&update).await?;
            output::output_success(&settings)
        }
        SettingsAction::Reset => {
            let settings = store.reset().await?;
            output::output_success(&settings)
        }
    }
}

fn build_settings_update(args: &SettingsSetArgs) -> anyhow::Result<SettingsUpdate> {
    let theme = match &args.theme {
        Some(t) => Some(t.parse::<Theme>()?),
        None => None,
    };
    let default_task_view = match &args.default_task_view {
        Some(v) => Some(v.parse::<TaskView>()?),
        None => None,
    };
    Ok(SettingsUpdate {
        theme,
        compact_view: args.compact_view,
        show_completed_tasks: args.show_completed_tasks,
        default_task_view,
        notifications: args.notifications,
    })
}
