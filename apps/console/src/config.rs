use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};

const DEFAULT_API_BASE_URL: &str = "http://localhost:4567";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub profile: AppProfile,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            profile: AppProfile::Dev,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        Self::from_lookup(read_env)
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults for
    /// anything missing or unparsable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("IDS_API_BASE_URL").filter(|value| !value.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }

        config.profile = AppProfile::from_env(lookup("IDS_PROFILE"));

        if let Some(secs) =
            lookup("IDS_REQUEST_TIMEOUT_SECS").and_then(|value| value.trim().parse::<u64>().ok())
        {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }

        config
    }

    /// Base URL without trailing slashes, ready for path joins.
    pub fn endpoint(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "IDS_API_BASE_URL" => option_env!("IDS_API_BASE_URL"),
        "IDS_PROFILE" => option_env!("IDS_PROFILE"),
        "IDS_REQUEST_TIMEOUT_SECS" => option_env!("IDS_REQUEST_TIMEOUT_SECS"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.api_base_url, "http://localhost:4567");
        assert_eq!(config.profile, AppProfile::Dev);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("IDS_API_BASE_URL", " http://ids.internal:9000/ "),
            ("IDS_PROFILE", "production"),
            ("IDS_REQUEST_TIMEOUT_SECS", "30"),
        ]));
        assert_eq!(config.api_base_url, "http://ids.internal:9000/");
        assert_eq!(config.endpoint(), "http://ids.internal:9000");
        assert_eq!(config.profile, AppProfile::Prod);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn timeout_is_clamped_and_garbage_ignored() {
        let zero = AppConfig::from_lookup(lookup_from(&[("IDS_REQUEST_TIMEOUT_SECS", "0")]));
        assert_eq!(zero.request_timeout, Duration::from_secs(1));

        let garbage =
            AppConfig::from_lookup(lookup_from(&[("IDS_REQUEST_TIMEOUT_SECS", "soon")]));
        assert_eq!(garbage.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn blank_base_url_keeps_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("IDS_API_BASE_URL", "   ")]));
        assert_eq!(config.api_base_url, "http://localhost:4567");
    }

    #[test]
    fn timeout_serializes_as_millis() {
        let value = serde_json::to_value(AppConfig::default()).unwrap();
        assert_eq!(value["request_timeout"], 10_000);
        assert_eq!(value["profile"], "Dev");
    }
}
