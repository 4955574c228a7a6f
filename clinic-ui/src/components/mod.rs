//! UI Components
//!
//! Reusable Leptos components for the dashboard shell.

pub mod crud_form;
pub mod login_form;
pub mod nav;
pub mod panel;
pub mod user_menu;

pub use crud_form::{CrudForm, NewRecordButton};
pub use login_form::LoginForm;
pub use nav::Sidebar;
pub use panel::Panel;
pub use user_menu::TopBar;
