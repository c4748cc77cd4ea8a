//! Output file naming.

use chrono::{DateTime, SecondsFormat, Utc};

/// Build a unique output file name for `tool`.
///
/// Format: `{tool}_{timestamp}_{8 hex chars}.{ext}` where the timestamp is
/// ISO-8601 UTC with `:` and `.` replaced by `-`. Uniqueness is not
/// guaranteed; callers accept the rare collision.
///
/// # Examples
///
/// ```
/// use pictor_security::generate_filename;
///
/// let name = generate_filename("generate_icon", "png");
/// assert!(name.starts_with("generate_icon_"));
/// assert!(name.ends_with(".png"));
/// ```
pub fn generate_filename(tool: &str, ext: &str) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format_filename(tool, ext, Utc::now(), &suffix[..8])
}

fn format_filename(tool: &str, ext: &str, at: DateTime<Utc>, suffix: &str) -> String {
    let stamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{}_{}_{}.{}", tool, stamp, suffix, ext)
}
