//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding where a successful login lands
const DASHBOARD_ENV: &str = "PORTAL_AUTH_DASHBOARD";

const DEFAULT_LOGIN_DELAY_MS: u64 = 1500;
const DEFAULT_REGISTRATION_DELAY_MS: u64 = 2000;
const DEFAULT_NOTIFICATION_SECS: u64 = 4;
const DEFAULT_DASHBOARD: &str = "dashboard";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Simulated login round trip
    pub login_delay_ms: Option<u64>,
    /// Simulated registration round trip
    pub registration_delay_ms: Option<u64>,
    /// How long error toasts stay on screen
    pub notification_secs: Option<u64>,
    /// Destination shown after a successful login
    pub dashboard_destination: Option<String>,
}

impl AuthConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "portal", "portal-auth-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AuthConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms.unwrap_or(DEFAULT_LOGIN_DELAY_MS))
    }

    pub fn registration_delay(&self) -> Duration {
        Duration::from_millis(
            self.registration_delay_ms
                .unwrap_or(DEFAULT_REGISTRATION_DELAY_MS),
        )
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_secs.unwrap_or(DEFAULT_NOTIFICATION_SECS))
    }

    /// Dashboard destination, with the environment taking precedence
    pub fn dashboard_destination(&self) -> String {
        std::env::var(DASHBOARD_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .or_else(|| self.dashboard_destination.clone())
            .unwrap_or_else(|| DEFAULT_DASHBOARD.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert!(config.login_delay_ms.is_none());
        assert!(config.registration_delay_ms.is_none());
        assert!(config.notification_secs.is_none());
        assert!(config.dashboard_destination.is_none());
    }

    #[test]
    fn test_default_durations() {
        let config = AuthConfig::default();
        assert_eq!(config.login_delay(), Duration::from_millis(1500));
        assert_eq!(config.registration_delay(), Duration::from_millis(2000));
        assert_eq!(config.notification_ttl(), Duration::from_secs(4));
    }

    #[test]
    fn test_overridden_durations() {
        let config = AuthConfig {
            login_delay_ms: Some(0),
            registration_delay_ms: Some(10),
            notification_secs: Some(1),
            ..Default::default()
        };
        assert_eq!(config.login_delay(), Duration::ZERO);
        assert_eq!(config.registration_delay(), Duration::from_millis(10));
        assert_eq!(config.notification_ttl(), Duration::from_secs(1));
    }

    #[test]
    fn test_serialization() {
        let config = AuthConfig {
            login_delay_ms: Some(250),
            registration_delay_ms: Some(500),
            notification_secs: Some(6),
            dashboard_destination: Some("patient-dashboard".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AuthConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.login_delay_ms, Some(250));
        assert_eq!(parsed.registration_delay_ms, Some(500));
        assert_eq!(parsed.notification_secs, Some(6));
        assert_eq!(
            parsed.dashboard_destination,
            Some("patient-dashboard".to_string())
        );
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AuthConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.login_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"login_delay_ms": 10, "unknown_field": "value"}"#;
        let parsed: AuthConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.login_delay_ms, Some(10));
    }

    #[test]
    fn test_dashboard_destination_env_overrides_file() {
        let config = AuthConfig {
            dashboard_destination: Some("from-file".to_string()),
            ..Default::default()
        };

        std::env::set_var(DASHBOARD_ENV, "from-env");
        let with_env = config.dashboard_destination();
        std::env::remove_var(DASHBOARD_ENV);

        assert_eq!(with_env, "from-env");
        assert_eq!(config.dashboard_destination(), "from-file");
        assert_eq!(AuthConfig::default().dashboard_destination(), "dashboard");
    }

    #[test]
    fn test_load_returns_ok_when_no_file() {
        let result = AuthConfig::load();
        assert!(result.is_ok());
    }
}
