//! Shell State
//!
//! The per-session state machine. Fields are private; the shell changes
//! them only through the transition methods below.

use std::collections::BTreeSet;

use super::page::PageId;
use super::view::FormKind;

/// Authentication state of the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Current selection and open/closed UI state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    session: SessionState,
    current: PageId,
    dropdown_open: bool,
    sidebar_collapsed: bool,
    open_forms: BTreeSet<FormKind>,
}

impl NavigationState {
    pub fn new(session: SessionState, current: PageId) -> Self {
        Self {
            session,
            current,
            dropdown_open: false,
            sidebar_collapsed: false,
            open_forms: BTreeSet::new(),
        }
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session == SessionState::LoggedIn
    }

    pub fn current(&self) -> &PageId {
        &self.current
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn is_form_open(&self, form: FormKind) -> bool {
        self.open_forms.contains(&form)
    }

    pub(crate) fn log_in(&mut self) {
        self.session = SessionState::LoggedIn;
    }

    /// Also closes the dropdown and every form
    pub(crate) fn log_out(&mut self) {
        self.session = SessionState::LoggedOut;
        self.dropdown_open = false;
        self.open_forms.clear();
    }

    pub(crate) fn select(&mut self, page: PageId) {
        self.current = page;
    }

    /// Flip the dropdown, returning the new open state
    pub(crate) fn toggle_dropdown(&mut self) -> bool {
        self.dropdown_open = !self.dropdown_open;
        self.dropdown_open
    }

    pub(crate) fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Flip the sidebar, returning the new collapsed state
    pub(crate) fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }

    pub(crate) fn set_form_open(&mut self, form: FormKind, open: bool) {
        if open {
            self.open_forms.insert(form);
        } else {
            self.open_forms.remove(&form);
        }
    }

    /// Close all forms, returning the ones that were open
    pub(crate) fn take_open_forms(&mut self) -> Vec<FormKind> {
        std::mem::take(&mut self.open_forms).into_iter().collect()
    }
}
