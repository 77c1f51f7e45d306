//! Gateway and logging configuration.
//!
//! Values are fixed at build time: a browser bundle has no process environment.

use std::str::FromStr;

use log::LevelFilter;

/// Origin used when `BUCKET_API_ORIGIN` is not set at build time
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:3001";

/// Where the backend gateway lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    origin: String,
}

impl GatewayConfig {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Read `BUCKET_API_ORIGIN` captured at compile time, falling back to the default
    pub fn from_build_env() -> Self {
        match option_env!("BUCKET_API_ORIGIN") {
            Some(origin) if !origin.trim().is_empty() => Self::new(origin.trim()),
            _ => Self::default(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Absolute URL for an API path (path must start with `/`)
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_ORIGIN)
    }
}

/// Log level from `BUCKET_LOG` captured at compile time (default: info)
pub fn log_level_from_build_env() -> LevelFilter {
    parse_level(option_env!("BUCKET_LOG"))
}

fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin() {
        let config = GatewayConfig::default();
        assert_eq!(config.origin(), "http://localhost:3001");
        assert_eq!(config.url("/api/bucket"), "http://localhost:3001/api/bucket");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = GatewayConfig::new("https://bucket.example.com//");
        assert_eq!(config.url("/api/bucket/items"), "https://bucket.example.com/api/bucket/items");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
    }
}
