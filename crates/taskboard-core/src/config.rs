use crate::{BoardError, BoardResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_DUE_SOON_HOURS: i64 = 48;
const DEFAULT_RECENT_COMPLETED_DAYS: i64 = 7;
const DEFAULT_RECENT_COMPLETED_LIMIT: usize = 5;

const MAX_DUE_SOON_HOURS: i64 = 24 * 366;
const MAX_RECENT_COMPLETED_DAYS: i64 = 3660;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where user display preferences are stored.
    #[serde(default)]
    pub settings_path: Option<PathBuf>,
    #[serde(default)]
    pub due_soon_hours: Option<i64>,
    #[serde(default)]
    pub recent_completed_days: Option<i64>,
    #[serde(default)]
    pub recent_completed_limit: Option<usize>,
}

impl AppConfig {
    pub fn config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskboard"))
        }
        #[cfg(any(target_os = "linux", target_os = "windows"))]
        {
            dirs::config_dir().map(|config| config.join("taskboard"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load the user config, falling back to defaults when it is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> BoardResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| BoardError::Config {
            path: path.display().to_string(),
            source: Some(Box::new(e)),
        })?;
        config.validate().map_err(|reason| BoardError::Config {
            path: path.display().to_string(),
            source: Some(reason.into()),
        })?;
        Ok(config)
    }

    /// Window settings must be positive and at most about ten years.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(hours) = self.due_soon_hours {
            if !(1..=MAX_DUE_SOON_HOURS).contains(&hours) {
                return Err(format!(
                    "due_soon_hours must be between 1 and {}, got {}",
                    MAX_DUE_SOON_HOURS, hours
                ));
            }
        }
        if let Some(days) = self.recent_completed_days {
            if !(1..=MAX_RECENT_COMPLETED_DAYS).contains(&days) {
                return Err(format!(
                    "recent_completed_days must be between 1 and {}, got {}",
                    MAX_RECENT_COMPLETED_DAYS, days
                ));
            }
        }
        if self.recent_completed_limit == Some(0) {
            return Err("recent_completed_limit must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn effective_settings_path(&self) -> Option<PathBuf> {
        self.settings_path
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("settings.json")))
    }

    pub fn effective_due_soon_hours(&self) -> i64 {
        self.due_soon_hours.unwrap_or(DEFAULT_DUE_SOON_HOURS)
    }

    pub fn effective_recent_completed_days(&self) -> i64 {
        self.recent_completed_days
            .unwrap_or(DEFAULT_RECENT_COMPLETED_DAYS)
    }

    pub fn effective_recent_completed_limit(&self) -> usize {
        self.recent_completed_limit
            .unwrap_or(DEFAULT_RECENT_COMPLETED_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_due_soon_hours(), 48);
        assert_eq!(config.effective_recent_completed_days(), 7);
        assert_eq!(config.effective_recent_completed_limit(), 5);
    }

    #[test]
    fn test_load_from_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "due_soon_hours = 24").unwrap();
        writeln!(file, "settings_path = \"/tmp/taskboard-settings.json\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.effective_due_soon_hours(), 24);
        assert_eq!(config.effective_recent_completed_limit(), 5);
        assert_eq!(
            config.effective_settings_path(),
            Some(PathBuf::from("/tmp/taskboard-settings.json"))
        );
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "due_soon_hours = \"soon\"").unwrap();

        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, BoardError::Config { .. }));
    }

    fn load_str(content: &str) -> BoardResult<AppConfig> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        AppConfig::load_from(file.path())
    }

    #[test]
    fn test_load_rejects_huge_windows() {
        let err = load_str("recent_completed_days = 100000000").unwrap_err();
        assert!(matches!(err, BoardError::Config { .. }));

        let err = load_str("due_soon_hours = 9999999999999").unwrap_err();
        assert!(matches!(err, BoardError::Config { .. }));
    }

    #[test]
    fn test_load_rejects_non_positive_windows() {
        assert!(load_str("due_soon_hours = 0").is_err());
        assert!(load_str("due_soon_hours = -5").is_err());
        assert!(load_str("recent_completed_days = -1").is_err());
        assert!(load_str("recent_completed_limit = 0").is_err());
    }

    #[test]
    fn test_load_accepts_window_bounds() {
        let config = load_str("due_soon_hours = 1\nrecent_completed_days = 3660").unwrap();
        assert_eq!(config.effective_due_soon_hours(), 1);
        assert_eq!(config.effective_recent_completed_days(), 3660);
    }
}
