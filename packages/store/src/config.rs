//! # Demo configuration — `login.toml`
//!
//! Defines the TOML configuration for the sign-in demo. The web binary embeds
//! the file at build time; a missing or empty file is equivalent to
//! [`LoginConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! users_key = "demo_users"                # JSON record mapping
//! current_user_key = "demo_current_user"  # removed on sign out
//!
//! [submit]
//! latency_ms = 600                        # simulated processing delay
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `login.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub submit: SubmitConfig,
}

/// Browser storage keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_users_key")]
    pub users_key: String,
    #[serde(default = "default_current_user_key")]
    pub current_user_key: String,
}

fn default_users_key() -> String {
    "demo_users".to_string()
}

fn default_current_user_key() -> String {
    "demo_current_user".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_key: default_users_key(),
            current_user_key: default_current_user_key(),
        }
    }
}

/// Submission configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Delay between submit and evaluation, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    600
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl LoginConfig {
    /// Builder method to set the simulated latency.
    pub fn with_latency_ms(mut self, ms: u64) -> Self {
        self.submit.latency_ms = ms;
        self
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.submit.latency_ms)
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "login.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = LoginConfig::from_toml("").unwrap();
        assert_eq!(config, LoginConfig::default());
        assert_eq!(config.storage.users_key, "demo_users");
        assert_eq!(config.storage.current_user_key, "demo_current_user");
        assert_eq!(config.latency(), Duration::from_millis(600));
    }

    #[test]
    fn test_partial_override() {
        let config = LoginConfig::from_toml("[submit]\nlatency_ms = 0\n").unwrap();
        assert_eq!(config.submit.latency_ms, 0);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = LoginConfig::default().with_latency_ms(250);
        let text = config.to_toml().unwrap();
        assert!(text.contains("latency_ms = 250"));
        assert_eq!(LoginConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(LoginConfig::from_toml("[submit]\nlatency_ms = \"slow\"\n").is_err());
    }
}
