//! HTTP clients for Storyloom's generative backends.
//!
//! Two clients live here, both speaking the SiliconFlow (OpenAI-compatible)
//! wire format over `reqwest`:
//!
//! - [`ChatClient`] drives the chat-completion endpoint. One attempt per
//!   call; failures surface immediately.
//! - [`ImageClient`] drives the image-generations endpoint. It makes one
//!   attempt; wrap it in [`Retrying`] to get bounded exponential backoff on
//!   rate limiting.
//!
//! Construction never performs network I/O. Connectivity checks happen
//! through the explicit [`storyloom_interface::Health`] trait.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod image;
mod retry;
mod text;

pub use config::{BackendConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
pub use image::ImageClient;
pub use retry::{Retrying, RetryPolicy};
pub use text::ChatClient;
