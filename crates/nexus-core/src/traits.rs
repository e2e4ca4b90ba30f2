//! Core traits for dorknexus abstractions.
//!
//! These traits define the interfaces that concrete implementations must
//! satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{GroundedResponse, VaultItem};

// =============================================================================
// GENERATION BACKEND
// =============================================================================

/// Text-generation backend: the application's only outbound dependency
/// beyond the filesystem.
///
/// One prompt in, one response out, single attempt; retry and cancellation
/// policy live with the caller.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Backend identifier for logging (e.g. "gemini", "mock").
    fn name(&self) -> &str;

    /// Generate a completion for the prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate with web-search grounding where the backend supports it.
    ///
    /// The default implementation degrades to plain generation with no
    /// sources.
    async fn generate_grounded(&self, prompt: &str) -> Result<GroundedResponse> {
        Ok(GroundedResponse {
            text: self.generate(prompt).await?,
            sources: Vec::new(),
        })
    }
}

// =============================================================================
// VAULT REPOSITORY
// =============================================================================

/// Persistence seam for the saved-query vault.
///
/// All operations are synchronous: the backing store is a local file read
/// once at startup and rewritten in full on every mutation. Callers that
/// expose these operations from multiple tasks must serialize them behind
/// a single mutual-exclusion region together with the in-memory sequence.
pub trait VaultRepository: Send + Sync {
    /// Read the backing store. Missing or malformed content degrades to an
    /// empty sequence; this never fails and never blocks startup.
    fn load(&self) -> Vec<VaultItem>;

    /// Serialize the full sequence and overwrite the backing store
    /// atomically. Write failures propagate to the caller.
    fn save(&self, items: &[VaultItem]) -> Result<()>;

    /// Append a freshly-created item and persist. The caller is responsible
    /// for rejecting an empty `dork` before calling.
    ///
    /// On a persistence failure the in-memory append is kept and the error
    /// propagates, leaving a memory/disk divergence until the next
    /// successful save.
    fn add(&self, items: &mut Vec<VaultItem>, dork: &str, tags: &str, notes: &str)
        -> Result<VaultItem>;
}
