//! Safety policies around tool-triggered file writes.
//!
//! - [`PathGuard`] confines every read and write to one output directory.
//! - [`generate_filename`] produces timestamped, collision-resistant names.
//! - [`RateLimiter`] caps requests per tool over a sliding 60 second window.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod filename;
mod path_guard;
mod rate_limit;

pub use filename::generate_filename;
pub use path_guard::PathGuard;
pub use rate_limit::{DEFAULT_RATE_LIMIT, RATE_WINDOW, RateLimiter};
