//! Shell Controller
//!
//! Every DOM event of the dashboard ends up in one of the transition
//! methods here. Each runs to completion synchronously, so a handler never
//! observes a half-applied page switch.

use tracing::{debug, error, info, warn};

use super::page::{PageId, PageSet, LOGOUT};
use super::state::{NavigationState, SessionState};
use super::view::{ClickTarget, FormKind, ShellView};
use crate::config::NavigationConfig;
use crate::session::TokenStore;

/// Dashboard navigation and session controller
pub struct Shell<V, S> {
    view: V,
    store: S,
    pages: PageSet,
    home_page: PageId,
    login_page: PageId,
    require_stored_token: bool,
    state: NavigationState,
}

impl<V: ShellView, S: TokenStore> Shell<V, S> {
    /// Build a shell in the logged-out state. Call [`Shell::init`] once the
    /// view is attached.
    pub fn new(config: &NavigationConfig, view: V, store: S) -> Self {
        let login_page = PageId::new(config.login_page.as_str());
        Self {
            view,
            store,
            pages: config.page_set(),
            home_page: PageId::new(config.home_page.as_str()),
            require_stored_token: config.require_stored_token,
            state: NavigationState::new(SessionState::LoggedOut, login_page.clone()),
            login_page,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_page(&self) -> &PageId {
        self.state.current()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Page-load initialization: derive the logged-in flag from the stored
    /// access token and route to the home or login page.
    pub fn init(&mut self) {
        let logged_in = if self.require_stored_token {
            match self.store.has_access_token() {
                Ok(present) => present,
                Err(e) => {
                    warn!(error = %e, "Token storage unreadable, starting logged out");
                    false
                }
            }
        } else {
            true
        };

        self.view.set_dropdown_hidden(true);
        self.view.set_sidebar_collapsed(false);
        for form in FormKind::ALL {
            self.view.set_form_hidden(form, true);
        }

        if logged_in {
            self.state.log_in();
            info!(page = %self.home_page, "Session found, opening dashboard");
            self.render(self.home_page.clone());
        } else {
            info!(page = %self.login_page, "No session, showing login");
            self.render(self.login_page.clone());
        }
    }

    /// Sidebar link click. `logout` is intercepted; anything else goes to
    /// [`Shell::show_page`]. Returns whether a page was rendered.
    pub fn navigate(&mut self, target: &str) -> bool {
        if target == LOGOUT {
            self.logout();
            return true;
        }
        self.show_page(target)
    }

    /// Show exactly the panel named `id` and mark exactly the sidebar links
    /// targeting it as active.
    ///
    /// Ids outside the page set are ignored: no panel changes and no error.
    /// While logged out every page except the login page is gated and the
    /// login page is shown instead.
    pub fn show_page(&mut self, id: &str) -> bool {
        let Some(page) = self.pages.get(id).cloned() else {
            warn!(page = id, "Ignoring navigation to unknown page");
            return false;
        };

        if !self.state.is_logged_in() && page != self.login_page {
            debug!(page = %page, "Logged out, redirecting to login page");
            self.render(self.login_page.clone());
            return true;
        }

        self.render(page);
        true
    }

    /// Clear the stored tokens and the logged-in flag, then show the login
    /// page. A storage failure is logged; the in-memory session still ends.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            error!(error = %e, "Failed to clear stored tokens");
        }
        self.state.log_out();
        self.view.set_dropdown_hidden(true);
        info!("Logged out");
        self.render(self.login_page.clone());
    }

    /// A login completed and its tokens are stored
    pub fn on_login(&mut self) {
        self.state.log_in();
        info!(page = %self.home_page, "Logged in");
        self.render(self.home_page.clone());
    }

    /// Document click, already classified against the user menu
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::UserMenuTrigger => {
                let open = self.state.toggle_dropdown();
                self.view.set_dropdown_hidden(!open);
            }
            ClickTarget::InsideUserMenu => {}
            ClickTarget::Outside => {
                self.state.close_dropdown();
                self.view.set_dropdown_hidden(true);
            }
        }
    }

    /// `menuToggle` click
    pub fn toggle_sidebar(&mut self) {
        let collapsed = self.state.toggle_sidebar();
        self.view.set_sidebar_collapsed(collapsed);
    }

    /// New-record button
    pub fn open_form(&mut self, form: FormKind) {
        self.state.set_form_open(form, true);
        self.view.set_form_hidden(form, false);
    }

    /// Cancel button
    pub fn close_form(&mut self, form: FormKind) {
        self.state.set_form_open(form, false);
        self.view.set_form_hidden(form, true);
    }

    fn render(&mut self, page: PageId) {
        self.view.hide_all_panels();
        if !self.view.reveal_panel(&page) {
            warn!(page = %page, "No panel rendered for page");
        }

        let targets = self.view.link_targets();
        for (index, target) in targets.iter().enumerate() {
            let active = target.as_deref() == Some(page.as_str());
            self.view.set_link_active(index, active);
        }

        for form in self.state.take_open_forms() {
            self.view.set_form_hidden(form, true);
        }

        debug!(page = %page, "Page shown");
        self.state.select(page);
    }
}
