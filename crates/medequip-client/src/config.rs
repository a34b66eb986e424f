//! Client configuration

/// Base URL used when `API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the REST backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Server base URL (e.g., "http://localhost:8000"), without the `/api` suffix
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve from the `API_URL` variable captured when the bundle was built.
    ///
    /// The browser has no process environment, so the deployment-time value
    /// is baked in by the compiler.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("API_URL"))
    }

    /// Use `value` if it is non-blank, else [`DEFAULT_API_URL`]
    pub fn resolve(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_API_URL),
        }
    }

    /// `{base_url}/api`
    pub fn api_root(&self) -> String {
        format!("{}/api", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root() {
        assert_eq!(ApiConfig::default().api_root(), "http://localhost:8000/api");
        assert_eq!(ApiConfig::resolve(None).api_root(), "http://localhost:8000/api");
        assert_eq!(ApiConfig::resolve(Some("  ")).base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_override_strips_trailing_slash() {
        let config = ApiConfig::resolve(Some("https://inventory.example.org/"));
        assert_eq!(config.api_root(), "https://inventory.example.org/api");
    }
}
