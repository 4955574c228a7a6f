//! Data Transfer Objects
//!
//! Request and response bodies of the login endpoint. Unknown response
//! fields are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::LoginError;
use crate::session::SessionTokens;

/// Login request body: `{"email": ..., "password": ...}`
///
/// Values are forwarded as entered; empty or malformed input is the
/// server's to reject.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Success body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<LoginResponse> for SessionTokens {
    fn from(response: LoginResponse) -> Self {
        SessionTokens::new(response.access_token, response.refresh_token)
    }
}

/// Failure body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Extract a non-empty `message` from a raw error body.
    ///
    /// A body that is not JSON, or whose `message` is not a string, yields
    /// `None`.
    pub fn message_from(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorResponse>(body)
            .ok()
            .and_then(|error| error.message)
            .filter(|message| !message.is_empty())
    }
}

/// Decoded answer of the login endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthReply {
    /// 2xx with a token pair
    Accepted(SessionTokens),
    /// Any other status
    Rejected { status: u16, message: Option<String> },
}

impl AuthReply {
    /// Classify a response by status code and decode its body.
    ///
    /// A success status with a body missing either token is a parse failure,
    /// not a rejection.
    pub fn from_parts(status: u16, body: &[u8]) -> Result<Self, LoginError> {
        if (200..300).contains(&status) {
            let response: LoginResponse = serde_json::from_slice(body)
                .map_err(|e| LoginError::Parse(e.to_string()))?;
            Ok(AuthReply::Accepted(response.into()))
        } else {
            Ok(AuthReply::Rejected {
                status,
                message: ErrorResponse::message_from(body),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_body_has_exactly_two_keys() {
        let body = serde_json::to_value(Credentials::new("a@b.c", "hunter2")).unwrap();
        let object = body.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["email"], "a@b.c");
        assert_eq!(object["password"], "hunter2");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let debug = format!("{:?}", Credentials::new("a@b.c", "hunter2"));
        assert!(debug.contains("a@b.c"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_success_ignores_extra_fields() {
        let body = br#"{"access_token":"A","refresh_token":"B","user":{"id":7}}"#;
        let reply = AuthReply::from_parts(200, body).unwrap();
        assert_eq!(reply, AuthReply::Accepted(SessionTokens::new("A", "B")));
    }

    #[test]
    fn test_success_without_refresh_token_is_parse_error() {
        let err = AuthReply::from_parts(200, br#"{"access_token":"A"}"#).unwrap_err();
        assert!(matches!(err, LoginError::Parse(_)));
    }

    #[test]
    fn test_rejection_message_extraction() {
        let reply = AuthReply::from_parts(401, br#"{"message":"bad creds"}"#).unwrap();
        assert_eq!(
            reply,
            AuthReply::Rejected {
                status: 401,
                message: Some("bad creds".to_string())
            }
        );

        assert_eq!(ErrorResponse::message_from(br#"{"error":"nope"}"#), None);
        assert_eq!(ErrorResponse::message_from(br#"{"message":""}"#), None);
        assert_eq!(ErrorResponse::message_from(br#"{"message":42}"#), None);
        assert_eq!(ErrorResponse::message_from(b"<html>502</html>"), None);
        assert_eq!(ErrorResponse::message_from(b""), None);
    }
}
