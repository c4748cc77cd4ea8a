//! Error types for the Pictor image generation server.
//!
//! Every error records the source location where it was created via
//! `#[track_caller]`. The [`PictorError`] wrapper aggregates all of them so
//! tool handlers can propagate with `?` and convert to a uniform payload at
//! the dispatch boundary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod path;
mod provider;
mod rate_limit;
mod validation;

pub use config::ConfigError;
pub use error::{PictorError, PictorErrorKind, PictorResult};
pub use path::{PathError, PathErrorKind};
pub use provider::{ProviderError, ProviderErrorKind};
pub use rate_limit::RateLimitError;
pub use validation::ValidationError;
