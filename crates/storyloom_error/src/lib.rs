//! Error types for the Storyloom library.
//!
//! This crate provides the foundation error types used throughout the
//! Storyloom workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storyloom_error::{StoryloomResult, ConfigError};
//!
//! fn load_key() -> StoryloomResult<String> {
//!     Err(ConfigError::new("STORYLOOM_API_KEY not set"))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod image;
mod pipeline;
mod segment;
mod text;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{StoryloomError, StoryloomErrorKind, StoryloomResult};
pub use image::{ImageError, ImageErrorKind};
pub use pipeline::{PipelineError, Stage};
pub use segment::{SegmentError, SegmentErrorKind};
pub use text::{TextError, TextErrorKind};
