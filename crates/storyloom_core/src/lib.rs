//! Core data types for the Storyloom story generation library.
//!
//! This crate provides the foundation data types used across all Storyloom
//! interfaces: the story request and its validating builder, the assembled
//! storybook record, chat message types for the text backend, and the
//! pass-through options for the image backend.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod message;
mod progress;
mod request;
mod role;
mod storybook;

pub use image::ImageOptions;
pub use message::Message;
pub use progress::GenerationProgress;
pub use request::{Mood, Setting, StoryRequest, StoryRequestBuilder, MAX_THEMES};
pub use role::Role;
pub use storybook::{InteractiveElement, StoryPage, Storybook};
