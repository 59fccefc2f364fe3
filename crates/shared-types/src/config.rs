use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Where dashboard statistics are counted.
///
/// Every field defaults so that a missing or partial `config.toml` yields an
/// unconfigured data source rather than a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataSourceConfig {
    /// PostgREST base URL, e.g. `https://xyz.supabase.co/rest/v1`.
    #[serde(default)]
    pub rest_url: Option<String>,
    /// Public (anon) API key sent as `apikey` and bearer token.
    #[serde(default)]
    pub anon_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            rest_url: None,
            anon_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DataSourceConfig {
    /// True when both the URL and the key are present and non-empty.
    pub fn is_configured(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.rest_url) && present(&self.anon_key)
    }
}

/// Identity used when the portal runs without a hosted auth provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionConfig {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalConfig {
    #[serde(default)]
    pub data: DataSourceConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl PortalConfig {
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
