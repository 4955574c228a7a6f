//! Login Endpoint Client
//!
//! The [`AuthClient`] seam lets the controller run against a real HTTP stack
//! (reqwest natively, gloo-net in the browser) or a scripted fake in tests.
//! No timeout and no retry are applied to the exchange.

use async_trait::async_trait;

use super::dto::{AuthReply, Credentials};
use super::error::LoginError;

/// One credential exchange against the authentication endpoint.
///
/// Futures are `?Send`: in the browser everything runs on the UI thread.
#[async_trait(?Send)]
pub trait AuthClient {
    /// POST the credentials as JSON and classify the answer.
    ///
    /// `Err` is reserved for transport and decode failures; a non-success
    /// status is `Ok(AuthReply::Rejected { .. })`.
    async fn login(&self, credentials: &Credentials) -> Result<AuthReply, LoginError>;
}

#[cfg(feature = "native-client")]
pub use http::HttpAuthClient;

#[cfg(feature = "native-client")]
mod http {
    use super::*;
    use crate::config::ApiConfig;
    use reqwest::Client;

    /// reqwest-backed client
    #[derive(Debug, Clone)]
    pub struct HttpAuthClient {
        client: Client,
        login_url: String,
    }

    impl HttpAuthClient {
        pub fn new(config: &ApiConfig) -> Self {
            Self {
                client: Client::new(),
                login_url: config.login_url(),
            }
        }

        pub fn login_url(&self) -> &str {
            &self.login_url
        }
    }

    #[async_trait(?Send)]
    impl AuthClient for HttpAuthClient {
        async fn login(&self, credentials: &Credentials) -> Result<AuthReply, LoginError> {
            let response = self
                .client
                .post(&self.login_url)
                .json(credentials)
                .send()
                .await
                .map_err(|e| LoginError::Transport(e.to_string()))?;

            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| LoginError::Transport(e.to_string()))?;

            tracing::debug!(status, bytes = body.len(), "Login endpoint responded");
            AuthReply::from_parts(status, &body)
        }
    }

}
