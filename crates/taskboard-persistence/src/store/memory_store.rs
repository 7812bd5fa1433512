use crate::traits::SettingsStore;
use taskboard_core::BoardResult;
use taskboard_domain::UserSettings;
use tokio::sync::RwLock;

/// Settings kept for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: RwLock<UserSettings>,
}

impl MemorySettingsStore {
    pub fn new(settings: UserSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }
}

#[async_trait::async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn load(&self) -> BoardResult<UserSettings> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: &UserSettings) -> BoardResult<()> {
        *self.settings.write().await = settings.clone();
        Ok(())
    }
}
