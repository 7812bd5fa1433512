//! User display preferences.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use taskboard_core::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(BoardError::Validation(format!("unknown theme: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskView {
    #[default]
    Board,
    List,
}

impl TaskView {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::List => "list",
        }
    }
}

impl fmt::Display for TaskView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskView {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "board" => Ok(Self::Board),
            "list" => Ok(Self::List),
            _ => Err(BoardError::Validation(format!("unknown task view: {}", s))),
        }
    }
}

/// Persisted display preferences. Missing keys take their defaults on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub theme: Theme,
    pub compact_view: bool,
    pub show_completed_tasks: bool,
    pub default_task_view: TaskView,
    pub notifications: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            compact_view: false,
            show_completed_tasks: true,
            default_task_view: TaskView::Board,
            notifications: true,
        }
    }
}

impl UserSettings {
    /// Returns the settings with every field present in `update` overwritten.
    pub fn merged(mut self, update: &SettingsUpdate) -> Self {
        update.apply_to(&mut self);
        self
    }
}

/// Partial settings change; `None` leaves the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compact_view: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_completed_tasks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_task_view: Option<TaskView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply_to(&self, settings: &mut UserSettings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(compact) = self.compact_view {
            settings.compact_view = compact;
        }
        if let Some(show) = self.show_completed_tasks {
            settings.show_completed_tasks = show;
        }
        if let Some(view) = self.default_task_view {
            settings.default_task_view = view;
        }
        if let Some(notifications) = self.notifications {
            settings.notifications = notifications;
        }
    }
}
