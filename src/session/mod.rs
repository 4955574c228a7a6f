//! Session Tokens
//!
//! The access/refresh token pair issued by the authentication endpoint and
//! the key-value store it is persisted in.

pub mod error;
pub mod tokens;

pub use error::{StorageError, StorageResult};
pub use tokens::{
    MemoryTokenStore, SessionTokens, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
};
