//! # Clinic
//!
//! Client core of the clinic web interface: the login token lifecycle and
//! the dashboard's navigation/session shell.
//!
//! ## Modules
//!
//! - [`auth`]: credential exchange against the login endpoint
//! - [`session`]: the access/refresh token pair and its storage
//! - [`shell`]: page switching, sidebar state, user menu and logout
//! - [`config`]: TOML client configuration
//!
//! The browser surface lives in the `clinic-ui` crate, which implements
//! [`LoginView`], [`ShellView`], [`TokenStore`] and [`AuthClient`] on top of
//! the DOM, `localStorage` and `fetch`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clinic::{ClientConfig, Credentials, HttpAuthClient, LoginController, MemoryTokenStore};
//! # struct NoView;
//! # impl clinic::LoginView for NoView {
//! #     fn show_error(&mut self, _: &str) {}
//! #     fn hide_error(&mut self) {}
//! #     fn set_submitting(&mut self, _: bool) {}
//! #     fn navigate(&mut self, _: &str) {}
//! # }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = ClientConfig::default();
//!     let controller = LoginController::new(
//!         HttpAuthClient::new(&config.api),
//!         MemoryTokenStore::new(),
//!         config.navigation.post_login_href.clone(),
//!     );
//!
//!     let outcome = controller
//!         .submit(Credentials::new("therapist@clinic.test", "secret"), &mut NoView)
//!         .await;
//!     println!("{:?}", outcome);
//! }
//! ```

pub mod auth;
pub mod config;
pub mod session;
pub mod shell;

pub use auth::{
    AuthClient, AuthReply, Credentials, LoginController, LoginError, LoginOutcome, LoginView,
    DEFAULT_REJECTION_MESSAGE, RETRY_LATER_MESSAGE,
};

#[cfg(feature = "native-client")]
pub use auth::HttpAuthClient;

pub use config::{ApiConfig, ClientConfig, ConfigError, LoggingConfig, NavigationConfig};

pub use session::{
    MemoryTokenStore, SessionTokens, StorageError, StorageResult, TokenStore, ACCESS_TOKEN_KEY,
    REFRESH_TOKEN_KEY,
};

pub use shell::{
    ClickTarget, FormKind, NavigationState, PageId, PageSet, SessionState, Shell, ShellView,
    LOGOUT,
};
