//! Trait definitions for generative backends and their capabilities.

use crate::HealthStatus;
use async_trait::async_trait;
use storyloom_core::ImageOptions;
use storyloom_error::StoryloomResult;

/// A chat-completion backend that turns prompts into narrative text.
///
/// Implementations make exactly one attempt per call: creative text calls
/// are not idempotent-safe to blindly retry and a fresh call costs real
/// quota, so failures propagate immediately.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate raw narrative text from a system and a user prompt.
    async fn generate_text(&self, system: &str, user: &str) -> StoryloomResult<String>;

    /// Provider name (e.g., "siliconflow").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "THUDM/GLM-4-9B-0414").
    fn model_name(&self) -> &str;
}

/// An image-synthesis backend that turns a descriptive prompt into an
/// image reference (URL).
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image and return its reference.
    async fn generate_image(&self, prompt: &str, options: &ImageOptions)
    -> StoryloomResult<String>;

    /// Provider name (e.g., "siliconflow").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "Kwai-Kolors/Kolors").
    fn model_name(&self) -> &str;
}

/// Backends that support an explicit connectivity probe.
///
/// Construction is side-effect free everywhere in Storyloom; callers that
/// want a connectivity check invoke this deliberately.
#[async_trait]
pub trait Health {
    /// Check if the backend is available and functioning.
    async fn health(&self) -> StoryloomResult<HealthStatus>;
}
