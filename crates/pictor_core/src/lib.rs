//! Core data types for the Pictor image generation server.
//!
//! This crate provides the provider-independent request and result types
//! shared by the adapter and tool layers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod options;
mod observability;
mod request;
mod result;
mod size;

pub use observability::init_tracing;
pub use options::{BackgroundMode, ImageStyle, OutputFormat};
pub use request::{GenerationRequest, GenerationRequestBuilder, MAX_PROMPT_CHARS};
pub use result::{GenerationResult, ImagePayload};
pub use size::ImageSize;
