use std::time::Duration;

use shared::navigation::REGISTER_REDIRECT_DELAY_MS;

pub const DEFAULT_API_BASE_URL: &str = "https://fastapi-oauth-83ss.onrender.com/api/v1/auth";

/// Client settings. The browser has no process environment, so overrides
/// are baked in at build time:
///
/// - `GREF_API_BASE_URL`: auth API base, e.g. `http://localhost:8000/api/v1/auth`
/// - `GREF_REGISTER_REDIRECT_MS`: pause between registration and the login page
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub register_redirect_delay: Duration,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_values(
            option_env!("GREF_API_BASE_URL"),
            option_env!("GREF_REGISTER_REDIRECT_MS"),
        )
    }

    fn from_values(api_base_url: Option<&str>, redirect_ms: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();

        let redirect_ms = match redirect_ms.map(str::parse::<u64>) {
            Some(Ok(ms)) => ms,
            Some(Err(e)) => {
                tracing::warn!("ignoring GREF_REGISTER_REDIRECT_MS: {}", e);
                REGISTER_REDIRECT_DELAY_MS
            }
            None => REGISTER_REDIRECT_DELAY_MS,
        };

        Self {
            api_base_url,
            register_redirect_delay: Duration::from_millis(redirect_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(
            config.register_redirect_delay,
            Duration::from_millis(REGISTER_REDIRECT_DELAY_MS)
        );
    }

    #[test]
    fn test_blank_base_url_falls_back() {
        for value in ["", "   "] {
            let config = AppConfig::from_values(Some(value), None);
            assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        }
    }

    #[test]
    fn test_overrides_are_used() {
        let config = AppConfig::from_values(
            Some(" http://localhost:8000/api/v1/auth "),
            Some("250"),
        );
        assert_eq!(config.api_base_url, "http://localhost:8000/api/v1/auth");
        assert_eq!(config.register_redirect_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_bad_redirect_delay_falls_back() {
        for value in ["soon", "-5", ""] {
            let config = AppConfig::from_values(None, Some(value));
            assert_eq!(
                config.register_redirect_delay,
                Duration::from_millis(REGISTER_REDIRECT_DELAY_MS)
            );
        }
    }
}
