//! Reactive Shell
//!
//! Bridges the core [`Shell`] to Leptos: the shell writes through
//! [`SignalShellView`] into signals, and the markup derives its `hidden`,
//! `active` and `collapsed` classes from those signals.

use leptos::*;
use std::collections::BTreeSet;

use clinic::{ClickTarget, FormKind, NavigationConfig, PageId, PageSet, Shell, ShellView};

use super::storage::LocalStorageTokenStore;
use crate::components::nav::SIDEBAR_LINKS;
use crate::pages::PANEL_IDS;

/// Signals mirrored by the markup
#[derive(Clone, Copy)]
pub struct ShellSignals {
    /// Panel without the `hidden` class, if any
    pub visible_panel: RwSignal<Option<PageId>>,
    /// `active` flag per sidebar link, in [`SIDEBAR_LINKS`] order
    pub active_links: RwSignal<Vec<bool>>,
    pub dropdown_hidden: RwSignal<bool>,
    pub sidebar_collapsed: RwSignal<bool>,
    pub hidden_forms: RwSignal<BTreeSet<FormKind>>,
}

impl ShellSignals {
    pub fn new(link_count: usize) -> Self {
        Self {
            visible_panel: create_rw_signal(None),
            active_links: create_rw_signal(vec![false; link_count]),
            dropdown_hidden: create_rw_signal(true),
            sidebar_collapsed: create_rw_signal(false),
            hidden_forms: create_rw_signal(FormKind::ALL.into_iter().collect()),
        }
    }

    pub fn is_panel_hidden(&self, id: &str) -> bool {
        self.visible_panel
            .with(|visible| visible.as_ref().map_or(true, |page| page.as_str() != id))
    }

    pub fn is_link_active(&self, index: usize) -> bool {
        self.active_links
            .with(|links| links.get(index).copied().unwrap_or(false))
    }

    pub fn is_form_hidden(&self, form: FormKind) -> bool {
        self.hidden_forms.with(|forms| forms.contains(&form))
    }
}

/// [`ShellView`] over [`ShellSignals`] and the statically rendered markup
pub struct SignalShellView {
    signals: ShellSignals,
    panels: PageSet,
    link_targets: Vec<Option<String>>,
}

impl SignalShellView {
    pub fn new(signals: ShellSignals, panels: PageSet, link_targets: Vec<Option<String>>) -> Self {
        Self {
            signals,
            panels,
            link_targets,
        }
    }
}

impl ShellView for SignalShellView {
    fn hide_all_panels(&mut self) {
        self.signals.visible_panel.set(None);
    }

    fn reveal_panel(&mut self, page: &PageId) -> bool {
        if !self.panels.contains(page.as_str()) {
            return false;
        }
        self.signals.visible_panel.set(Some(page.clone()));
        true
    }

    fn link_targets(&self) -> Vec<Option<String>> {
        self.link_targets.clone()
    }

    fn set_link_active(&mut self, index: usize, active: bool) {
        self.signals.active_links.update(|links| {
            if let Some(link) = links.get_mut(index) {
                *link = active;
            }
        });
    }

    fn set_dropdown_hidden(&mut self, hidden: bool) {
        self.signals.dropdown_hidden.set(hidden);
    }

    fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.signals.sidebar_collapsed.set(collapsed);
    }

    fn set_form_hidden(&mut self, form: FormKind, hidden: bool) {
        self.signals.hidden_forms.update(|forms| {
            if hidden {
                forms.insert(form);
            } else {
                forms.remove(&form);
            }
        });
    }
}

pub type ClinicShell = Shell<SignalShellView, LocalStorageTokenStore>;

/// Handle to the dashboard shell, provided as context
#[derive(Clone, Copy)]
pub struct ShellContext {
    shell: StoredValue<ClinicShell>,
    pub signals: ShellSignals,
}

impl ShellContext {
    /// Sidebar link click
    pub fn navigate(&self, target: &str) {
        self.shell.update_value(|shell| {
            shell.navigate(target);
        });
    }

    pub fn click(&self, target: ClickTarget) {
        self.shell.update_value(|shell| shell.handle_click(target));
    }

    pub fn toggle_sidebar(&self) {
        self.shell.update_value(|shell| shell.toggle_sidebar());
    }

    pub fn open_form(&self, form: FormKind) {
        self.shell.update_value(|shell| shell.open_form(form));
    }

    pub fn close_form(&self, form: FormKind) {
        self.shell.update_value(|shell| shell.close_form(form));
    }

    pub fn on_login(&self) {
        self.shell.update_value(|shell| shell.on_login());
    }
}

/// Create the shell for the rendered panels and sidebar, run its page-load
/// initialization and provide it to the component tree.
pub fn provide_shell(config: &NavigationConfig) -> ShellContext {
    let signals = ShellSignals::new(SIDEBAR_LINKS.len());
    let view = SignalShellView::new(
        signals,
        PageSet::new(PANEL_IDS),
        SIDEBAR_LINKS
            .iter()
            .map(|link| Some(link.target.to_string()))
            .collect(),
    );

    let mut shell = Shell::new(config, view, LocalStorageTokenStore);
    shell.init();

    let context = ShellContext {
        shell: store_value(shell),
        signals,
    };
    provide_context(context);
    context
}

/// Shell provided by an ancestor [`provide_shell`]
pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>().expect("ShellContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_signal_view_reflects_writes() {
        let runtime = create_runtime();

        let signals = ShellSignals::new(2);
        let mut view = SignalShellView::new(
            signals,
            PageSet::new(["dashboard", "login"]),
            vec![Some("dashboard".to_string()), Some("logout".to_string())],
        );

        view.hide_all_panels();
        assert!(view.reveal_panel(&PageId::new("dashboard")));
        assert!(!signals.is_panel_hidden("dashboard"));
        assert!(signals.is_panel_hidden("login"));

        assert!(!view.reveal_panel(&PageId::new("sessions")));
        assert!(!signals.is_panel_hidden("dashboard"));

        view.set_link_active(0, true);
        view.set_link_active(7, true);
        assert_eq!(signals.active_links.get_untracked(), vec![true, false]);

        view.set_form_hidden(FormKind::Session, false);
        assert!(!signals.is_form_hidden(FormKind::Session));
        assert!(signals.is_form_hidden(FormKind::Payment));

        runtime.dispose();
    }
}
