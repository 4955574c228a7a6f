//! Configuration System
//!
//! Client settings loaded from TOML. The browser build embeds its config
//! file at compile time and reads it with [`ClientConfig::from_toml_str`];
//! native builds may also [`ClientConfig::load`] a file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::shell::page::{PageSet, LOGOUT};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Authentication endpoint location
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_login_path")]
    pub login_path: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_login_path() -> String {
    "/login/".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
        }
    }
}

impl ApiConfig {
    /// Base URL and login path joined by exactly one slash
    pub fn login_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.login_path.trim_start_matches('/')
        )
    }
}

/// Dashboard shell configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationConfig {
    /// Closed set of page identifiers, one panel each
    #[serde(default = "default_pages")]
    pub pages: Vec<String>,

    #[serde(default = "default_home_page")]
    pub home_page: String,

    #[serde(default = "default_login_page")]
    pub login_page: String,

    /// Full-navigation target after a successful login
    #[serde(default = "default_post_login_href")]
    pub post_login_href: String,

    /// Gate the dashboard on a stored access token. `false` treats every
    /// visitor as logged in (demo builds).
    #[serde(default = "default_require_stored_token")]
    pub require_stored_token: bool,
}

fn default_pages() -> Vec<String> {
    ["dashboard", "sessions", "payments", "patients", "profile", "login"]
        .iter()
        .map(|page| page.to_string())
        .collect()
}

fn default_home_page() -> String {
    "dashboard".to_string()
}

fn default_login_page() -> String {
    "login".to_string()
}

fn default_post_login_href() -> String {
    "./home.html".to_string()
}

fn default_require_stored_token() -> bool {
    true
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            pages: default_pages(),
            home_page: default_home_page(),
            login_page: default_login_page(),
            post_login_href: default_post_login_href(),
            require_stored_token: default_require_stored_token(),
        }
    }
}

impl NavigationConfig {
    pub fn page_set(&self) -> PageSet {
        PageSet::new(self.pages.iter().map(String::as_str))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse(error) => ConfigError::Parse(format!("{:?}: {}", path, error)),
            other => other,
        })
    }

    /// Check the page set against the pages the shell must be able to show
    pub fn validate(&self) -> Result<(), ConfigError> {
        let nav = &self.navigation;
        let pages = nav.page_set();

        if pages.contains(LOGOUT) {
            return Err(ConfigError::Invalid(format!(
                "'{}' is reserved and cannot be a page",
                LOGOUT
            )));
        }
        for (role, page) in [("home_page", &nav.home_page), ("login_page", &nav.login_page)] {
            if !pages.contains(page) {
                return Err(ConfigError::Invalid(format!(
                    "{} '{}' is not in pages",
                    role, page
                )));
            }
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DOCUMENTED_DEFAULTS: &str = r#"# Clinic Client Configuration

[api]
# Authentication API base URL
base_url = "http://localhost:8000"

# Login endpoint path (POST, JSON body {email, password})
login_path = "/login/"

[navigation]
# Closed set of dashboard pages; each needs a panel with the same id
pages = ["dashboard", "sessions", "payments", "patients", "profile", "login"]

# Page shown after load when logged in
home_page = "dashboard"

# Page shown when logged out and after logout
login_page = "login"

# Where to go after a successful login
post_login_href = "./home.html"

# Require a stored access token to enter the dashboard
require_stored_token = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"
"#;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.login_url(), "http://localhost:8000/login/");
        assert_eq!(config.navigation.home_page, "dashboard");
        assert!(config.navigation.require_stored_token);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_documented_defaults_match_code() {
        let config = ClientConfig::from_toml_str(DOCUMENTED_DEFAULTS).unwrap();
        let defaults = ClientConfig::default();
        assert_eq!(config.navigation.pages, defaults.navigation.pages);
        assert_eq!(config.api.login_url(), defaults.api.login_url());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = ClientConfig::from_toml_str(
            r#"
            [api]
            base_url = "https://api.clinic.example/"

            [navigation]
            require_stored_token = false
            "#,
        )
        .unwrap();

        assert_eq!(config.api.login_url(), "https://api.clinic.example/login/");
        assert!(!config.navigation.require_stored_token);
        assert_eq!(config.navigation.login_page, "login");
    }

    #[test]
    fn test_rejects_logout_page() {
        let err = ClientConfig::from_toml_str(
            r#"
            [navigation]
            pages = ["dashboard", "login", "logout"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_home_outside_pages() {
        let err = ClientConfig::from_toml_str(
            r#"
            [navigation]
            pages = ["sessions", "login"]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("home_page 'dashboard'"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");

        let missing = ClientConfig::load(Path::new("/nonexistent/clinic.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
