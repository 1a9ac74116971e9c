//! Trait definitions for Storyloom's generative backends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{Health, ImageGenerator, TextGenerator};
pub use types::HealthStatus;
