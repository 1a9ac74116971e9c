//! Prompt building, page segmentation and story assembly.
//!
//! This crate is the engineering core of Storyloom: it turns a
//! [`storyloom_core::StoryRequest`] into prompts, parses non-compliant
//! model output into exactly N pages, sequences the rate-aware backend
//! calls, and stitches the results into a [`storyloom_core::Storybook`]
//! with randomized interactive hotspots.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod defaults;
mod engine;
pub mod prompts;
mod segment;
mod store;

pub use catalog::{CategoryEntry, DEFAULT_CATEGORY, derive_category, entry_for};
pub use engine::{EngineConfig, ProgressHook, StoryEngine};
pub use segment::{PLACEHOLDER_SENTENCE, segment};
pub use store::{CATEGORIES, StorybookStore};
