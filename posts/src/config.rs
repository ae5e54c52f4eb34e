//! Backend API location.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `FORUMHUB_API_URL` is unset or blank.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build a config from an optional raw base URL.
    ///
    /// Blank values fall back to [`DEFAULT_API_URL`]; trailing slashes are
    /// trimmed so endpoint joins never produce `//`.
    #[must_use]
    pub fn from_value(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Post-creation endpoint, `{base}/posts`.
    #[must_use]
    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }
}
