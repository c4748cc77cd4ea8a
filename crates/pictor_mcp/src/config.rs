//! Server configuration resolved from the environment.

use derive_getters::Getters;
use pictor_error::ConfigError;
use pictor_models::ProviderConfig;
use pictor_security::DEFAULT_RATE_LIMIT;
use std::path::PathBuf;

/// Default output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// Default log level when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Immutable server configuration, read once at startup.
#[derive(Debug, Clone, Getters)]
pub struct ServerConfig {
    /// Image provider settings
    provider: ProviderConfig,
    /// Requests per tool per minute
    rate_limit: usize,
    /// Directory all generated and read files are confined to
    output_dir: PathBuf,
    /// Root that reported file paths are relative to
    project_root: PathBuf,
    /// Default tracing level
    log_level: String,
}

impl ServerConfig {
    /// Create config from environment variables.
    ///
    /// Reads, in addition to the provider variables:
    /// - `PICTOR_RATE_LIMIT_PER_MINUTE` (default: 20)
    /// - `PICTOR_PROJECT_ROOT` (default: current directory)
    /// - `PICTOR_OUTPUT_DIR` (default: `generated` under the project root)
    /// - `PICTOR_LOG_LEVEL` (default: `info`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = ProviderConfig::from_lookup(&lookup)?;

        let rate_limit = match non_empty("PICTOR_RATE_LIMIT_PER_MINUTE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::new(format!(
                        "PICTOR_RATE_LIMIT_PER_MINUTE must be a positive integer, got '{}'",
                        raw
                    )));
                }
            },
            None => DEFAULT_RATE_LIMIT,
        };

        let project_root = match non_empty("PICTOR_PROJECT_ROOT") {
            Some(root) => PathBuf::from(root),
            None => std::env::current_dir().map_err(|e| {
                ConfigError::new(format!("Cannot determine working directory: {}", e))
            })?,
        };

        let output_dir = match non_empty("PICTOR_OUTPUT_DIR") {
            Some(dir) => {
                let dir = PathBuf::from(dir);
                if dir.is_absolute() {
                    dir
                } else {
                    project_root.join(dir)
                }
            }
            None => project_root.join(DEFAULT_OUTPUT_DIR),
        };

        let log_level =
            non_empty("PICTOR_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            provider,
            rate_limit,
            output_dir,
            project_root,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("PICTOR_PROJECT_ROOT", "/srv/site")]))
            .unwrap();
        assert_eq!(*config.rate_limit(), DEFAULT_RATE_LIMIT);
        assert_eq!(config.output_dir(), &PathBuf::from("/srv/site/generated"));
        assert_eq!(config.log_level(), "info");
        assert!(!config.provider().is_configured());
    }

    #[test]
    fn test_relative_output_dir_joins_project_root() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PICTOR_PROJECT_ROOT", "/srv/site"),
            ("PICTOR_OUTPUT_DIR", "public/img"),
            ("PICTOR_RATE_LIMIT_PER_MINUTE", "5"),
        ]))
        .unwrap();
        assert_eq!(config.output_dir(), &PathBuf::from("/srv/site/public/img"));
        assert_eq!(*config.rate_limit(), 5);
    }

    #[test]
    fn test_zero_rate_limit_rejected() {
        let err =
            ServerConfig::from_lookup(lookup(&[("PICTOR_RATE_LIMIT_PER_MINUTE", "0")])).unwrap_err();
        assert!(err.message.contains("PICTOR_RATE_LIMIT_PER_MINUTE"));
    }
}
