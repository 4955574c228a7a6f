//! Authentication
//!
//! Exchanges an email/password pair for session tokens against the remote
//! login endpoint, and the controller that drives the login form.
//!
//! - [`dto`]: wire types for the login endpoint
//! - [`client`]: the [`AuthClient`] seam and its reqwest implementation
//! - [`controller`]: the form submission flow with its in-flight guard

pub mod client;
pub mod controller;
pub mod dto;
pub mod error;

pub use client::AuthClient;
#[cfg(feature = "native-client")]
pub use client::HttpAuthClient;
pub use controller::{LoginController, LoginOutcome, LoginView};
pub use dto::{AuthReply, Credentials, ErrorResponse, LoginResponse};
pub use error::{LoginError, DEFAULT_REJECTION_MESSAGE, RETRY_LATER_MESSAGE};
