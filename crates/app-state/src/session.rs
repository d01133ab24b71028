//! Process-wide session state
//!
//! [`AppSession`] holds the preference state that the profile and filter
//! screens edit. It is injected into every screen; clones share the same
//! state. Persistence goes through a [`PreferencesBackend`], and the shipped
//! backend keeps snapshots in memory only.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use storage::{
    FilterPreferences, MemoryBackend, PreferenceSnapshot, PreferencesBackend, PreferencesError,
    UserPreferences,
};

/// Session errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The preferences backend failed
    #[error("Preferences error: {0}")]
    Preferences(#[from] PreferencesError),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Shared preference state
#[derive(Clone)]
pub struct AppSession {
    user: Arc<RwLock<UserPreferences>>,
    filters: Arc<RwLock<FilterPreferences>>,
    backend: Arc<dyn PreferencesBackend>,
}

impl AppSession {
    /// Create a session with default preferences
    pub fn new(backend: Arc<dyn PreferencesBackend>) -> Self {
        Self::from_snapshot(PreferenceSnapshot::default(), backend)
    }

    /// Create a session with default preferences and an in-memory backend
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Create a session from the backend's last snapshot, or defaults if it has none
    pub async fn load(backend: Arc<dyn PreferencesBackend>) -> Result<Self> {
        let snapshot = match backend.load().await? {
            Some(snapshot) => {
                tracing::info!("restored preferences from backend");
                snapshot
            }
            None => {
                tracing::info!("no saved preferences; using defaults");
                PreferenceSnapshot::default()
            }
        };
        Ok(Self::from_snapshot(snapshot, backend))
    }

    fn from_snapshot(snapshot: PreferenceSnapshot, backend: Arc<dyn PreferencesBackend>) -> Self {
        Self {
            user: Arc::new(RwLock::new(snapshot.user)),
            filters: Arc::new(RwLock::new(snapshot.filters)),
            backend,
        }
    }

    /// Write the current state to the backend
    pub async fn save(&self) -> Result<()> {
        let snapshot = self.snapshot();
        self.backend.save(&snapshot).await?;
        tracing::info!("preferences saved");
        Ok(())
    }

    /// Copy of the whole preference state
    pub fn snapshot(&self) -> PreferenceSnapshot {
        PreferenceSnapshot {
            user: self.user.read().clone(),
            filters: self.filters.read().clone(),
        }
    }

    /// Copy of the user preferences
    pub fn preferences(&self) -> UserPreferences {
        self.user.read().clone()
    }

    /// Edit the user preferences in place
    pub fn update_preferences<R>(&self, f: impl FnOnce(&mut UserPreferences) -> R) -> R {
        f(&mut self.user.write())
    }

    /// Copy of the filter settings
    pub fn filters(&self) -> FilterPreferences {
        self.filters.read().clone()
    }

    /// Replace the filter settings
    pub fn set_filters(&self, filters: FilterPreferences) {
        *self.filters.write() = filters;
        tracing::debug!("filter preferences committed");
    }

    /// Edit the filter settings in place
    pub fn update_filters<R>(&self, f: impl FnOnce(&mut FilterPreferences) -> R) -> R {
        f(&mut self.filters.write())
    }
}

impl Default for AppSession {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for AppSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSession")
            .field("user", &*self.user.read())
            .field("filters", &*self.filters.read())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use route_core::ModeId;
    use storage::DistanceUnit;

    mock! {
        pub Backend {}

        #[async_trait]
        impl PreferencesBackend for Backend {
            async fn load(&self) -> storage::Result<Option<PreferenceSnapshot>>;
            async fn save(&self, snapshot: &PreferenceSnapshot) -> storage::Result<()>;
        }
    }

    #[test]
    fn test_defaults() {
        let session = AppSession::in_memory();
        assert_eq!(session.preferences(), UserPreferences::default());
        assert_eq!(session.filters(), FilterPreferences::default());
    }

    #[test]
    fn test_clones_share_state() {
        let session = AppSession::in_memory();
        let other = session.clone();

        other.update_preferences(|prefs| prefs.toggle_units());
        other.update_filters(|filters| filters.toggle(ModeId::Cycling, 1));

        assert_eq!(session.preferences().units, DistanceUnit::Miles);
        assert!(!session.filters().for_mode(ModeId::Cycling)[1].value);
    }

    #[tokio::test]
    async fn test_load_without_snapshot_uses_defaults() {
        let mut backend = MockBackend::new();
        backend.expect_load().times(1).returning(|| Ok(None));

        let session = AppSession::load(Arc::new(backend)).await.unwrap();
        assert_eq!(session.snapshot(), PreferenceSnapshot::default());
    }

    #[tokio::test]
    async fn test_load_restores_snapshot() {
        let mut saved = PreferenceSnapshot::default();
        saved.user.toggle_theme();

        let mut backend = MockBackend::new();
        let returned = saved.clone();
        backend
            .expect_load()
            .returning(move || Ok(Some(returned.clone())));

        let session = AppSession::load(Arc::new(backend)).await.unwrap();
        assert!(session.preferences().theme.is_dark());
    }

    #[tokio::test]
    async fn test_load_propagates_backend_failure() {
        let mut backend = MockBackend::new();
        backend
            .expect_load()
            .returning(|| Err(PreferencesError::Backend("offline".to_string())));

        let result = AppSession::load(Arc::new(backend)).await;
        assert!(matches!(result, Err(SessionError::Preferences(_))));
    }

    #[tokio::test]
    async fn test_save_writes_current_state() {
        let mut backend = MockBackend::new();
        backend
            .expect_save()
            .withf(|snapshot| snapshot.filters.time_vs_distance == 80)
            .times(1)
            .returning(|_| Ok(()));

        let session = AppSession::new(Arc::new(backend));
        session.update_filters(|filters| filters.set_time_vs_distance(80));
        session.save().await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_round_trip() {
        let backend: Arc<dyn PreferencesBackend> = Arc::new(MemoryBackend::new());

        let session = AppSession::new(Arc::clone(&backend));
        session.update_preferences(|prefs| prefs.default_mode = ModeId::Transit);
        session.save().await.unwrap();

        let restored = AppSession::load(backend).await.unwrap();
        assert_eq!(restored.preferences().default_mode, ModeId::Transit);
    }
}
