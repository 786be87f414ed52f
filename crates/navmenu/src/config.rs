//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Directory holding `<language>.json` message files (default: ./locales).
    pub locales_dir: PathBuf,

    /// Language served when a request names none we know (default: zh-cn).
    pub default_language: String,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let locales_dir = lookup("LOCALES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./locales"));

        let default_language = lookup("DEFAULT_LANGUAGE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "zh-cn".to_string());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        Ok(Self {
            port,
            locales_dir,
            default_language,
            cors_allowed_origins,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.locales_dir, PathBuf::from("./locales"));
        assert_eq!(config.default_language, "zh-cn");
        assert_eq!(config.cors_allowed_origins, ["*"]);
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("LOCALES_DIR", "/srv/locales"),
            ("DEFAULT_LANGUAGE", "en"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.locales_dir, PathBuf::from("/srv/locales"));
        assert_eq!(config.default_language, "en");
        assert_eq!(
            config.cors_allowed_origins,
            ["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn invalid_port() {
        let err = load(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
