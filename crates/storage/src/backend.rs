//! Load/save hooks for preference state

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::preferences::PreferenceSnapshot;

/// Preference storage errors
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend could not complete the operation
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for preference storage
pub type Result<T> = std::result::Result<T, PreferencesError>;

/// Where preference snapshots are read from and written to
#[async_trait]
pub trait PreferencesBackend: Send + Sync {
    /// Read the last saved snapshot, or `None` if nothing was saved yet
    async fn load(&self) -> Result<Option<PreferenceSnapshot>>;

    /// Replace the saved snapshot
    async fn save(&self, snapshot: &PreferenceSnapshot) -> Result<()>;
}

/// Backend that lives as long as the process
///
/// Snapshots are kept as JSON text so that loads hand back independent copies.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: RwLock<Option<String>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferencesBackend for MemoryBackend {
    async fn load(&self) -> Result<Option<PreferenceSnapshot>> {
        let slot = self.slot.read().await;
        match slot.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, snapshot: &PreferenceSnapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)?;
        *self.slot.write().await = Some(json);
        tracing::debug!("preference snapshot stored in memory");
        Ok(())
    }
}
