//! # nexus-inference
//!
//! The external AI collaborator for dorknexus.
//!
//! This crate provides:
//! - The Gemini implementation of the `GenerationBackend` trait
//! - Fixed prompt templates and lenient model-output parsing
//! - The five assistant operations (construct, analyze, pivot, research,
//!   live search)
//! - The API-key configuration record
//!
//! # Feature Flags
//!
//! - `mock`: scripted in-memory backend for downstream tests
//!
//! # Example
//!
//! ```rust,no_run
//! use nexus_inference::{assistant, AiConfig, GeminiBackend};
//!
//! #[tokio::main]
//! async fn main() -> nexus_core::Result<()> {
//!     let config = AiConfig::load().unwrap_or_default();
//!     let backend = GeminiBackend::from_config(&config)?;
//!     let suggestion = assistant::suggest_dork(&backend, "exposed jenkins dashboards").await?;
//!     println!("{}", suggestion.dork);
//!     Ok(())
//! }
//! ```

pub mod assistant;
pub mod config;
pub mod gemini;
pub mod prompts;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use config::{AiConfig, ConfigError, ConfigResult};
pub use gemini::GeminiBackend;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockBackend;
