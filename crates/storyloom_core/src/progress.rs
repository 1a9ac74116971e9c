//! Transient generation progress reporting.

use serde::{Deserialize, Serialize};

/// A progress snapshot emitted while a story is being assembled.
///
/// UI-facing only; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationProgress {
    /// Human-readable description of the current step
    pub step: String,
    /// Completion percentage, 0 to 100
    pub progress: u8,
}

impl GenerationProgress {
    /// Create a progress snapshot, clamping the percentage to 100.
    pub fn new(step: impl Into<String>, progress: u8) -> Self {
        Self {
            step: step.into(),
            progress: progress.min(100),
        }
    }
}
