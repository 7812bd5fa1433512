use crate::serialization::JsonSerializer;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{Serializer, SettingsStore};
use std::path::{Path, PathBuf};
use taskboard_core::BoardResult;
use taskboard_domain::UserSettings;

/// JSON file-backed settings store.
///
/// The file holds the bare settings object. A missing file reads as the
/// defaults; a malformed one is an error rather than being silently replaced.
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }
}

#[async_trait::async_trait]
impl SettingsStore for JsonFileSettingsStore {
    async fn load(&self) -> BoardResult<UserSettings> {
        match AtomicWriter::read_optional(&self.path).await? {
            Some(bytes) => {
                let settings: UserSettings = JsonSerializer.deserialize(&bytes)?;
                tracing::debug!("Loaded settings from {}", self.path.display());
                Ok(settings)
            }
            None => Ok(UserSettings::default()),
        }
    }

    async fn save(&self, settings: &UserSettings) -> BoardResult<()> {
        let bytes = JsonSerializer.serialize(settings)?;
        AtomicWriter::write_atomic(&self.path, &bytes).await?;
        tracing::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
