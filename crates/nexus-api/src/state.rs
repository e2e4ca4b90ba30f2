//! Application state shared across handlers.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};

use nexus_core::{GenerationBackend, QuerySession, VaultItem, VaultRepository};
use nexus_inference::{AiConfig, GeminiBackend};
use nexus_vault::JsonVaultStore;

use crate::error::ApiError;

/// The vault's in-memory sequence together with its backing store.
///
/// Both sit behind one mutex so overlapping add/remove/save calls cannot
/// interleave a read-modify-write against the file (lost-update hazard).
pub struct VaultState {
    pub store: JsonVaultStore,
    pub items: Vec<VaultItem>,
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Current draft + derived query string.
    pub session: Arc<RwLock<QuerySession>>,
    /// Saved-query vault (items + file store, single mutex region).
    pub vault: Arc<Mutex<VaultState>>,
    /// AI configuration, updatable at runtime from the settings endpoint.
    pub config: Arc<RwLock<AiConfig>>,
    /// Where configuration updates are persisted.
    pub config_path: PathBuf,
    /// Test seam: when set, AI handlers use this backend instead of
    /// constructing a Gemini client from the configuration.
    backend_override: Option<Arc<dyn GenerationBackend>>,
}

impl AppState {
    /// Build state from a vault store and configuration, loading the vault
    /// once (missing or malformed files degrade to empty).
    pub fn new(store: JsonVaultStore, config: AiConfig, config_path: PathBuf) -> Self {
        let items = store.load();
        Self {
            session: Arc::new(RwLock::new(QuerySession::new())),
            vault: Arc::new(Mutex::new(VaultState { store, items })),
            config: Arc::new(RwLock::new(config)),
            config_path,
            backend_override: None,
        }
    }

    /// State with a scripted generation backend, for tests.
    pub fn with_backend(
        store: JsonVaultStore,
        config: AiConfig,
        config_path: PathBuf,
        backend: Arc<dyn GenerationBackend>,
    ) -> Self {
        Self {
            backend_override: Some(backend),
            ..Self::new(store, config, config_path)
        }
    }

    /// Resolve the generation backend for an AI request.
    ///
    /// Fails with 400 "not configured" when no API key is present.
    pub fn generation_backend(&self) -> Result<Arc<dyn GenerationBackend>, ApiError> {
        if let Some(backend) = &self.backend_override {
            return Ok(backend.clone());
        }
        let config = self.config.read().expect("config lock poisoned").clone();
        let backend = GeminiBackend::from_config(&config)?;
        Ok(Arc::new(backend))
    }
}
