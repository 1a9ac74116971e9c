//! Storyloom - Children's Storybook Generation
//!
//! Storyloom turns a structured story request into a complete illustrated
//! storybook: a generated narrative split into pages, one image per page
//! plus a cover, and randomized interactive hotspots keyed by story
//! category.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storyloom::{
//!     BackendConfig, ChatClient, ImageClient, Mood, Retrying, StoryEngine,
//!     StoryRequest,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BackendConfig::from_env()?;
//!     let engine = StoryEngine::new(
//!         ChatClient::new(config.clone()),
//!         Retrying::new(ImageClient::new(config)),
//!     );
//!
//!     let request = StoryRequest::builder()
//!         .main_character("小兔子")
//!         .mood(Mood::Happy)
//!         .theme("友情")
//!         .build()?;
//!
//!     let book = engine.assemble(&request, &mut rand::thread_rng()).await?;
//!     println!("{}", book.title);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Storyloom is organized as a workspace with focused crates:
//!
//! - `storyloom_error` - Error types
//! - `storyloom_core` - Core data types (StoryRequest, Storybook, etc.)
//! - `storyloom_interface` - TextGenerator and ImageGenerator traits
//! - `storyloom_backends` - HTTP clients and the rate-limit retry decorator
//! - `storyloom_pipeline` - Prompts, segmentation, assembly, and the store
//!
//! This crate (`storyloom`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use storyloom_backends::{BackendConfig, ChatClient, ImageClient, Retrying, RetryPolicy};
pub use storyloom_core::{
    GenerationProgress, ImageOptions, InteractiveElement, Message, Mood, Role, Setting, StoryPage,
    StoryRequest, StoryRequestBuilder, Storybook, MAX_THEMES,
};
pub use storyloom_error::{
    BuilderError, BuilderErrorKind, ConfigError, ImageError, ImageErrorKind, PipelineError,
    SegmentError, SegmentErrorKind, Stage, StoryloomError, StoryloomErrorKind, StoryloomResult,
    TextError, TextErrorKind,
};
pub use storyloom_interface::{Health, HealthStatus, ImageGenerator, TextGenerator};
pub use storyloom_pipeline::{
    derive_category, entry_for, segment, CategoryEntry, EngineConfig, ProgressHook, StoryEngine,
    StorybookStore, CATEGORIES, DEFAULT_CATEGORY, PLACEHOLDER_SENTENCE,
};
