//! # nexus-vault
//!
//! File-backed vault store for saved queries.
//!
//! The vault is a single JSON array of items, read once at startup and
//! rewritten in full on every mutation. Load failures degrade to an empty
//! vault; save failures propagate to the caller.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nexus_core::VaultRepository;
//! use nexus_vault::JsonVaultStore;
//!
//! let store = JsonVaultStore::new("nexus_vault.json");
//! let mut items = store.load();
//! let saved = store.add(&mut items, "site:example.com filetype:pdf", "recon", "")?;
//! println!("saved {}", saved.id);
//! # Ok::<(), nexus_core::Error>(())
//! ```

pub mod store;

pub use store::{remove, render_order, JsonVaultStore};
