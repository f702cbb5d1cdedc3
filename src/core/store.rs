//! # Store
//!
//! The single owner of [`AppState`]. Components never hold a writable
//! reference: they read through [`Store::state`] (or a [`Scope`]) and change
//! things only by dispatching actions.
//!
//! A [`Scope`] is what the layout shell hands to the pages. A scope built
//! without a store is a wiring mistake; reading state through it returns
//! [`StoreError::OutsideProvider`] instead of silently rendering defaults.

use std::fmt;

use log::debug;

use crate::core::action::{Action, Effect, update};
use crate::core::state::{AppState, DraftPatch, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// State was requested from a scope with no store behind it.
    OutsideProvider,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::OutsideProvider => {
                write!(f, "app state accessed outside of a store scope")
            }
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn scope(&self) -> Scope<'_> {
        Scope { store: Some(self) }
    }

    /// Applies `action` and returns the I/O the caller should start.
    pub fn dispatch(&mut self, action: Action) -> Effect {
        debug!("Dispatch: {:?}", action);
        update(&mut self.state, action)
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.dispatch(Action::SetActiveTab(tab));
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.dispatch(Action::ToggleMobileMenu);
    }

    pub fn close_mobile_menu(&mut self) {
        self.dispatch(Action::CloseMobileMenu);
    }

    pub fn update_contact_draft(&mut self, patch: DraftPatch) {
        self.dispatch(Action::UpdateContactDraft(patch));
    }

    pub fn reset_contact_draft(&mut self) {
        self.dispatch(Action::ResetContactDraft);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.dispatch(Action::SetLoading(loading));
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.dispatch(Action::SetError(error));
    }
}

/// Read access handed down the component tree.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    store: Option<&'a Store>,
}

impl<'a> Scope<'a> {
    /// A scope with no store behind it.
    pub fn detached() -> Self {
        Scope { store: None }
    }

    pub fn app_state(&self) -> Result<&'a AppState, StoreError> {
        self.store.map(Store::state).ok_or(StoreError::OutsideProvider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ContactDraft;
    use crate::test_support::test_store;

    #[test]
    fn named_actions_route_through_reducer() {
        let mut store = test_store();
        store.toggle_mobile_menu();
        assert!(store.state().mobile_menu_open);
        store.set_active_tab(Tab::Services);
        assert_eq!(store.state().active_tab, Tab::Services);
        assert!(!store.state().mobile_menu_open);

        store.update_contact_draft(DraftPatch {
            name: Some("Sam".into()),
            ..Default::default()
        });
        assert_eq!(store.state().contact_draft.name, "Sam");
        store.reset_contact_draft();
        assert_eq!(store.state().contact_draft, ContactDraft::default());

        store.set_loading(true);
        store.set_error(Some("x".into()));
        assert!(!store.state().loading);

        store.toggle_mobile_menu();
        store.close_mobile_menu();
        assert!(!store.state().mobile_menu_open);
    }

    #[test]
    fn scope_reads_through_store() {
        let store = test_store();
        let state = store.scope().app_state().unwrap();
        assert_eq!(state.active_tab, Tab::Home);
    }

    #[test]
    fn detached_scope_fails_fast() {
        assert_eq!(
            Scope::detached().app_state().unwrap_err(),
            StoreError::OutsideProvider
        );
    }
}
