//! Login Controller
//!
//! Drives one credential-form submission: a single request to the login
//! endpoint, token persistence on success, inline error otherwise.
//!
//! Concurrent submissions are not raced. While one exchange is pending the
//! controller refuses new submissions and the view disables its submit
//! control, so the persisted token pair always comes from the only request
//! that was sent.

use std::cell::Cell;

use tracing::{error, info, warn};

use super::client::AuthClient;
use super::dto::{AuthReply, Credentials};
use super::error::LoginError;
use crate::session::{SessionTokens, TokenStore};

/// DOM surface the controller writes to
pub trait LoginView {
    /// Put `message` in the error region and make the region visible
    fn show_error(&mut self, message: &str);

    /// Hide the error region; called when a new attempt starts
    fn hide_error(&mut self);

    /// Enable/disable the submit control
    fn set_submitting(&mut self, submitting: bool);

    /// Full-page navigation
    fn navigate(&mut self, href: &str);
}

/// Result of one `submit` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Tokens persisted and navigation issued
    LoggedIn(SessionTokens),
    /// Server rejected the credentials; carries the displayed text
    Rejected(String),
    /// Transport, decode or storage failure; carries the displayed text
    Failed(String),
    /// Another submission was still pending; nothing was sent
    Ignored,
}

/// Clears the in-flight flag however the submission ends, including when
/// the future is dropped mid-request.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Credential-form controller
pub struct LoginController<C, S> {
    client: C,
    store: S,
    post_login_href: String,
    in_flight: Cell<bool>,
}

impl<C: AuthClient, S: TokenStore> LoginController<C, S> {
    pub fn new(client: C, store: S, post_login_href: impl Into<String>) -> Self {
        Self {
            client,
            store,
            post_login_href: post_login_href.into(),
            in_flight: Cell::new(false),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Whether an exchange is pending
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Handle a form submission.
    ///
    /// The caller has already suppressed the browser's native form
    /// navigation. Field values are forwarded untouched.
    pub async fn submit<V>(&self, credentials: Credentials, view: &mut V) -> LoginOutcome
    where
        V: LoginView + ?Sized,
    {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            info!(email = %credentials.email, "Login already in flight, ignoring submit");
            return LoginOutcome::Ignored;
        };

        view.set_submitting(true);
        view.hide_error();
        info!(email = %credentials.email, "Attempting login");

        let result = self.exchange(&credentials).await;
        view.set_submitting(false);

        match result {
            Ok(tokens) => {
                info!(email = %credentials.email, "Login succeeded");
                view.navigate(&self.post_login_href);
                LoginOutcome::LoggedIn(tokens)
            }
            Err(err) => {
                let message = err.user_message();
                if err.is_rejection() {
                    warn!(email = %credentials.email, error = %err, "Login rejected");
                } else {
                    error!(email = %credentials.email, error = %err, "Login failed");
                }
                view.show_error(&message);

                if err.is_rejection() {
                    LoginOutcome::Rejected(message)
                } else {
                    LoginOutcome::Failed(message)
                }
            }
        }
    }

    async fn exchange(&self, credentials: &Credentials) -> Result<SessionTokens, LoginError> {
        match self.client.login(credentials).await? {
            AuthReply::Accepted(tokens) => {
                self.store.save(&tokens)?;
                Ok(tokens)
            }
            AuthReply::Rejected { status, message } => {
                Err(LoginError::Rejected { status, message })
            }
        }
    }
}
