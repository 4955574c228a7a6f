//! Shell View Interface
//!
//! The DOM reads and writes the shell needs. The browser implementation
//! maps these onto the `hidden`/`active` classes of the fixed markup; tests
//! use an in-memory recorder.

use super::page::PageId;

/// CRUD forms toggled by their new/cancel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormKind {
    Session,
    Payment,
}

impl FormKind {
    pub const ALL: [FormKind; 2] = [FormKind::Session, FormKind::Payment];

    /// Element id of the form
    pub fn element_id(&self) -> &'static str {
        match self {
            FormKind::Session => "sessionForm",
            FormKind::Payment => "paymentForm",
        }
    }
}

/// Where a document click landed, relative to the user menu.
///
/// Each click is classified once and dispatched once, so the click that
/// opens the dropdown can never also count as an outside click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The `userMenuToggle` trigger (or a descendant)
    UserMenuTrigger,
    /// Elsewhere inside the `userMenu` container
    InsideUserMenu,
    /// Anywhere else in the document
    Outside,
}

pub trait ShellView {
    /// Add `hidden` to every page-content panel
    fn hide_all_panels(&mut self);

    /// Remove `hidden` from the panel with this id; `false` if there is none
    fn reveal_panel(&mut self, page: &PageId) -> bool;

    /// Declared target page of each sidebar link, in document order
    fn link_targets(&self) -> Vec<Option<String>>;

    /// Add or remove `active` on the link at `index`
    fn set_link_active(&mut self, index: usize, active: bool);

    fn set_dropdown_hidden(&mut self, hidden: bool);

    fn set_sidebar_collapsed(&mut self, collapsed: bool);

    fn set_form_hidden(&mut self, form: FormKind, hidden: bool);
}
