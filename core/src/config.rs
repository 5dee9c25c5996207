//! Client configuration: base URL, default headers, request timeout.

use std::collections::BTreeMap;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://0.0.0.0:8000";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings shared by every request a handler makes.
///
/// Lives for the handler's lifetime. Headers are merge-updatable (existing
/// keys overwritten, new keys added; there is no removal operation) and the
/// timeout is replaced outright. An ordered map keeps the outgoing header
/// order deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub headers: BTreeMap<String, String>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Config pointing at `base_url` with no extra headers and the default
    /// 10-second timeout. A trailing slash on `base_url` is stripped so URL
    /// joining never produces `//`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: BTreeMap::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Merge `headers` into the current map; later entries win.
    pub fn merge_headers(&mut self, headers: impl IntoIterator<Item = (String, String)>) {
        self.headers.extend(headers);
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://0.0.0.0:8000");
        assert!(config.headers.is_empty());
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:8000/");
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn merge_overwrites_existing_and_adds_new() {
        let mut config = ClientConfig::default();
        config.merge_headers([("x-token".to_string(), "abc".to_string())]);
        config.merge_headers([
            ("x-token".to_string(), "def".to_string()),
            ("x-app".to_string(), "newsfeed".to_string()),
        ]);

        assert_eq!(config.headers.get("x-token").map(String::as_str), Some("def"));
        assert_eq!(config.headers.get("x-app").map(String::as_str), Some("newsfeed"));
        assert_eq!(config.headers.len(), 2);
    }
}
