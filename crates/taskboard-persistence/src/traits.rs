use async_trait::async_trait;
use std::path::Path;
use taskboard_core::BoardResult;
use taskboard_domain::{SettingsUpdate, UserSettings};

/// Key-value home for the user's display preferences.
///
/// Implementations handle different backends (file, memory).
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load the saved settings, or the defaults when nothing was saved yet.
    async fn load(&self) -> BoardResult<UserSettings>;

    /// Replace the saved settings.
    async fn save(&self, settings: &UserSettings) -> BoardResult<()>;

    /// Where the settings live, if they live on disk.
    fn path(&self) -> Option<&Path> {
        None
    }

    /// Merge a partial update into the saved settings and return the result.
    async fn update(&self, update: &SettingsUpdate) -> BoardResult<UserSettings> {
        let settings = self.load().await?.merged(update);
        self.save(&settings).await?;
        Ok(settings)
    }

    /// Overwrite the saved settings with the defaults.
    async fn reset(&self) -> BoardResult<UserSettings> {
        let settings = UserSettings::default();
        self.save(&settings).await?;
        Ok(settings)
    }
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> BoardResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> BoardResult<T>;
}
