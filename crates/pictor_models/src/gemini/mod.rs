//! Gemini image generation via `generateContent`.
//!
//! The API accepts a single free-text prompt plus a coarse generation
//! config, so style and background options are folded into the prompt text.

mod client;
mod request;
mod response;

pub use client::GeminiImageClient;
pub use request::{GenerateContentRequest, aspect_ratio, compose_prompt, size_tier};
pub use response::{RESPONSE_SHAPES, ShapeParser, parse_image_response};
