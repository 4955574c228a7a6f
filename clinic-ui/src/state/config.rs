//! Client Configuration
//!
//! The TOML config is embedded at build time.

use clinic::ClientConfig;

const EMBEDDED_CONFIG: &str = include_str!("../../clinic.toml");

/// Load the embedded config, falling back to defaults if it is invalid
pub fn load_config() -> ClientConfig {
    match ClientConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet
            web_sys::console::error_1(
                &format!("Invalid embedded config, using defaults: {}", e).into(),
            );
            ClientConfig::default()
        }
    }
}
