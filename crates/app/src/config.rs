use shared_types::{PortalConfig, Role};

/// Workspace `config.toml`, embedded so web builds need no filesystem.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Environment variables that override the embedded file.
pub const ENV_REST_URL: &str = "PORTAL_REST_URL";
pub const ENV_ANON_KEY: &str = "PORTAL_ANON_KEY";
pub const ENV_ROLE: &str = "PORTAL_ROLE";

/// Parse the embedded config and apply environment overrides.
///
/// An unparseable file falls back to defaults (no data source, no role).
pub fn load_config() -> PortalConfig {
    #[cfg(not(target_arch = "wasm32"))]
    let _ = dotenvy::dotenv();

    let mut config = PortalConfig::from_toml(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config.toml unreadable, using defaults");
        PortalConfig::default()
    });
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    tracing::debug!(
        data_configured = config.data.is_configured(),
        role = ?config.session.role,
        "portal config loaded"
    );
    config
}

/// Overlay values from `lookup` (normally the process environment).
pub fn apply_env_overrides(config: &mut PortalConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(ENV_REST_URL) {
        config.data.rest_url = Some(url);
    }
    if let Some(key) = lookup(ENV_ANON_KEY) {
        config.data.anon_key = Some(key);
    }
    if let Some(role) = lookup(ENV_ROLE) {
        match role.parse::<Role>() {
            Ok(role) => config.session.role = Some(role),
            Err(e) => tracing::warn!(error = %e, var = ENV_ROLE, "ignoring role override"),
        }
    }
}
