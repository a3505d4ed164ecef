use crate::{telemetry::DEFAULT_COLLECTOR_URL, validate};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_VALIDITY_DAYS: i64 = 7;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the persisted link set, e.g. "./.linklet"
    pub data_dir: PathBuf,

    /// Public base URL short links are shown under, e.g. "https://go.example.com".
    /// Never has a trailing slash.
    pub base_url: String,

    /// Where telemetry events are POSTed
    pub telemetry_url: String,

    /// Client identifier sent as `userAgent` with every telemetry event
    pub client_id: String,

    /// Resource locator sent as `url` with every telemetry event.
    /// Defaults to `base_url`.
    pub page_url: String,

    /// Validity window the shorten form starts with
    pub default_validity_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let base_url = "http://localhost:3000".to_owned();
        Self {
            data_dir: PathBuf::from("./.linklet"),
            page_url: base_url.clone(),
            base_url,
            telemetry_url: DEFAULT_COLLECTOR_URL.to_owned(),
            client_id: default_client_id(),
            default_validity_days: DEFAULT_VALIDITY_DAYS,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables (populate them with
    /// `dotenvy::dotenv()` first if a `.env` file should count).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let base_url = lookup("BASE_URL")
            .unwrap_or(defaults.base_url)
            .trim_end_matches('/')
            .to_owned();

        if !validate::is_valid_url(&base_url) {
            anyhow::bail!("BASE_URL must be an absolute URL, got '{base_url}'");
        }

        let default_validity_days = match lookup("DEFAULT_VALIDITY_DAYS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .context("DEFAULT_VALIDITY_DAYS must be a whole number of days")?,
            None => defaults.default_validity_days,
        };

        if !validate::is_valid_window(default_validity_days) {
            anyhow::bail!(
                "DEFAULT_VALIDITY_DAYS must be between {} and {}",
                validate::MIN_VALIDITY_DAYS,
                validate::MAX_VALIDITY_DAYS
            );
        }

        Ok(Self {
            data_dir: lookup("LINKLET_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            page_url: lookup("PAGE_URL").unwrap_or_else(|| base_url.clone()),
            base_url,
            telemetry_url: lookup("TELEMETRY_URL").unwrap_or(defaults.telemetry_url),
            client_id: lookup("CLIENT_ID").unwrap_or(defaults.client_id),
            default_validity_days,
        })
    }
}

fn default_client_id() -> String {
    format!("linklet/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.page_url, config.base_url);
        assert_eq!(config.telemetry_url, DEFAULT_COLLECTOR_URL);
        assert_eq!(config.default_validity_days, 7);
        assert!(config.client_id.starts_with("linklet/"));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = load(&[("BASE_URL", "https://go.example.com/")]).unwrap();
        assert_eq!(config.base_url, "https://go.example.com");
    }

    #[test]
    fn rejects_out_of_window_default() {
        assert!(load(&[("DEFAULT_VALIDITY_DAYS", "0")]).is_err());
        assert!(load(&[("DEFAULT_VALIDITY_DAYS", "a week")]).is_err());
        assert_eq!(
            load(&[("DEFAULT_VALIDITY_DAYS", "30")])
                .unwrap()
                .default_validity_days,
            30
        );
    }

    #[test]
    fn rejects_relative_base_url() {
        assert!(load(&[("BASE_URL", "go.example.com")]).is_err());
    }
}
