//! API Client
//!
//! HTTP communication with the clinic authentication API.

pub mod client;

pub use client::GlooAuthClient;
