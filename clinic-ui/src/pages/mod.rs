//! Pages
//!
//! The login route, the dashboard shell route and the content panels the
//! shell switches between.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod patients;
pub mod payments;
pub mod profile;
pub mod sessions;

pub use home::Home;
pub use login::LoginPage;

/// Element ids of the panels rendered by [`Home`]
pub const PANEL_IDS: [&str; 6] = [
    "dashboard",
    "sessions",
    "payments",
    "patients",
    "profile",
    "login",
];
