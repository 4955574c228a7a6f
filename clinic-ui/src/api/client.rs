//! HTTP API Client
//!
//! `fetch`-backed implementation of the core's [`AuthClient`].

use async_trait::async_trait;
use gloo_net::http::Request;

use clinic::{ApiConfig, AuthClient, AuthReply, Credentials, LoginError};

/// gloo-net login client
#[derive(Debug, Clone)]
pub struct GlooAuthClient {
    login_url: String,
}

impl GlooAuthClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            login_url: config.login_url(),
        }
    }
}

#[async_trait(?Send)]
impl AuthClient for GlooAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthReply, LoginError> {
        let response = Request::post(&self.login_url)
            .json(credentials)
            .map_err(|e| LoginError::Transport(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "Login endpoint responded");
        AuthReply::from_parts(status, &body)
    }
}
