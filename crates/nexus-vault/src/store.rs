//! JSON-file implementation of the vault repository.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use nexus_core::{defaults, Error, Result, VaultItem, VaultRepository};

/// Vault store persisting items as a pretty-printed JSON array.
pub struct JsonVaultStore {
    path: PathBuf,
}

impl JsonVaultStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the default vault location.
    ///
    /// `NEXUS_VAULT_PATH` wins; otherwise the platform data directory
    /// (falling back to the working directory when none exists).
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(defaults::ENV_VAULT_PATH) {
            return PathBuf::from(path);
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(defaults::APP_DIR)
            .join(defaults::VAULT_FILE)
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

impl VaultRepository for JsonVaultStore {
    fn load(&self) -> Vec<VaultItem> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "vault file absent, starting empty");
            return Vec::new();
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "vault file unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<VaultItem>>(&raw) {
            Ok(items) => {
                debug!(path = %self.path.display(), result_count = items.len(), "vault loaded");
                items
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "vault file malformed, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[VaultItem]) -> Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(items)?;

        // Write to a sibling temp file and rename over the target so a
        // reader never observes a partially written vault.
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        debug!(path = %self.path.display(), result_count = items.len(), "vault saved");
        Ok(())
    }

    fn add(
        &self,
        items: &mut Vec<VaultItem>,
        dork: &str,
        tags: &str,
        notes: &str,
    ) -> Result<VaultItem> {
        let item = VaultItem::new(dork, tags, notes);
        items.push(item.clone());
        self.save(items)?;
        Ok(item)
    }
}

/// The sequence with the item of the given id removed.
///
/// Removal is idempotent: an unknown id returns the sequence unchanged.
pub fn remove(items: &[VaultItem], id: Uuid) -> Vec<VaultItem> {
    items.iter().filter(|i| i.id != id).cloned().collect()
}

/// Display order: storage order reversed, most-recently-added first.
pub fn render_order(items: &[VaultItem]) -> Vec<VaultItem> {
    items.iter().rev().cloned().collect()
}
