//! Centralized default constants for dorknexus.
//!
//! **This module is the single source of truth** for all shared default
//! values. All crates should reference these constants instead of defining
//! their own magic numbers.

// =============================================================================
// STORAGE
// =============================================================================

/// Vault file name (JSON array of saved queries).
pub const VAULT_FILE: &str = "nexus_vault.json";

/// Configuration file name (single JSON record with the API key).
pub const CONFIG_FILE: &str = "config.json";

/// Application subdirectory under the platform config/data directories.
pub const APP_DIR: &str = "dorknexus";

/// Environment variable overriding the vault file path.
pub const ENV_VAULT_PATH: &str = "NEXUS_VAULT_PATH";

/// Environment variable overriding the config file path.
pub const ENV_CONFIG_PATH: &str = "NEXUS_CONFIG_PATH";

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP bind port for the local shell.
pub const SERVER_PORT: u16 = 7878;

/// Environment variable overriding the bind port.
pub const ENV_PORT: &str = "NEXUS_PORT";

/// Google web search URL prefix; the current dork is appended URL-encoded.
pub const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search?q=";

// =============================================================================
// INFERENCE
// =============================================================================

/// Base URL of the Gemini generative language API.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model.
pub const GEN_MODEL: &str = "gemini-2.0-flash";

/// Timeout for generation requests in seconds.
pub const GEN_TIMEOUT_SECS: u64 = 120;

/// Environment variable providing the API key (overrides the config file).
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// Environment variable overriding the generation model.
pub const ENV_GEN_MODEL: &str = "NEXUS_GEN_MODEL";

/// Upper bound of the analysis efficiency rating scale.
pub const ANALYSIS_RATING_MAX: i32 = 100;

// =============================================================================
// SETTINGS DISPLAY
// =============================================================================

/// How many trailing characters of the API key the settings endpoint reveals.
pub const KEY_MASK_VISIBLE: usize = 4;
