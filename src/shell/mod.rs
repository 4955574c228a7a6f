//! Navigation/Session Shell
//!
//! Owns the dashboard's current page and the logged-in flag, and keeps the
//! panels, the sidebar links and the user-menu dropdown consistent with
//! them through a [`ShellView`].

pub mod controller;
pub mod page;
pub mod state;
pub mod view;

pub use controller::Shell;
pub use page::{PageId, PageSet, LOGOUT};
pub use state::{NavigationState, SessionState};
pub use view::{ClickTarget, FormKind, ShellView};
