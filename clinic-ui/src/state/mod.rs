//! State Management
//!
//! Client configuration, token storage and the reactive side of the
//! navigation shell.

pub mod config;
pub mod shell;
pub mod storage;

pub use shell::{provide_shell, use_shell};
pub use storage::LocalStorageTokenStore;
