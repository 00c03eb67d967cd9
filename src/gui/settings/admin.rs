//! Generic admin settings controller
//!
//! Owns the lifecycle shared by every admin settings page: derive local state
//! from the persisted configuration, apply edits, then compose a new
//! configuration and hand it to a [`ConfigStore`]. Pages supply only the
//! projection in both directions.

use tracing::{debug, info, warn};

use crate::config::{ConfigStore, License, OverrideSource, ServerConfig};

/// A settings page editing a slice of the server configuration
pub trait SettingsPage {
    type State: Clone;

    /// Project the configuration into editable local state
    fn state_from_config(&self, config: &ServerConfig, license: &License) -> Self::State;

    /// Write local state back into a copy of the configuration
    fn config_from_state(&self, state: &Self::State, config: &ServerConfig) -> ServerConfig;

    /// Page-specific save gate
    fn can_save(&self, _state: &Self::State) -> bool {
        true
    }
}

/// Error returned by [`AdminSettings::save`]
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Settings cannot be saved in their current state")]
    NotSavable,

    #[error("Failed to save config: {0:#}")]
    Store(anyhow::Error),
}

/// Controller for one admin settings page
pub struct AdminSettings<P: SettingsPage> {
    page: P,
    config: ServerConfig,
    license: License,
    overrides: Box<dyn OverrideSource>,
    state: P::State,
    save_needed: bool,
    server_error: Option<String>,
}

impl<P: SettingsPage> AdminSettings<P> {
    pub fn new(
        page: P,
        config: ServerConfig,
        license: License,
        overrides: impl OverrideSource + 'static,
    ) -> Self {
        let state = page.state_from_config(&config, &license);
        Self {
            page,
            config,
            license,
            overrides: Box::new(overrides),
            state,
            save_needed: false,
            server_error: None,
        }
    }

    pub fn state(&self) -> &P::State {
        &self.state
    }

    /// The configuration as last loaded or saved
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn license(&self) -> &License {
        &self.license
    }

    pub fn save_needed(&self) -> bool {
        self.save_needed
    }

    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    /// Whether a field was supplied by the environment rather than this UI
    pub fn is_set_by_env(&self, field: &str) -> bool {
        self.overrides.is_overridden(field)
    }

    /// Apply a field edit and mark the page dirty
    pub fn update(&mut self, edit: impl FnOnce(&mut P::State)) {
        edit(&mut self.state);
        self.save_needed = true;
    }

    /// Apply an edit to local-only state without marking the page dirty
    pub fn update_local(&mut self, edit: impl FnOnce(&mut P::State)) {
        edit(&mut self.state);
    }

    /// Whether the save action is available
    pub fn can_save(&self) -> bool {
        self.save_needed && self.page.can_save(&self.state)
    }

    /// The configuration the current local state would produce
    pub fn composed_config(&self) -> ServerConfig {
        self.page.config_from_state(&self.state, &self.config)
    }

    /// Persist the edited configuration.
    ///
    /// On success local state is re-derived from the stored configuration.
    /// On failure local edits are kept and the error is remembered for display.
    pub fn save(&mut self, store: &mut dyn ConfigStore) -> Result<(), SaveError> {
        if !self.page.can_save(&self.state) {
            debug!("Save refused by page gate");
            return Err(SaveError::NotSavable);
        }

        let composed = self.composed_config();
        match store.save_config(&composed) {
            Ok(saved) => {
                self.state = self.page.state_from_config(&saved, &self.license);
                self.config = saved;
                self.save_needed = false;
                self.server_error = None;
                info!("Admin settings saved");
                Ok(())
            }
            Err(e) => {
                warn!("Failed to save admin settings: {:#}", e);
                self.server_error = Some(format!("{:#}", e));
                Err(SaveError::Store(e))
            }
        }
    }

    /// Discard local edits
    pub fn cancel(&mut self) {
        self.state = self.page.state_from_config(&self.config, &self.license);
        self.save_needed = false;
        self.server_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MemoryConfigStore, NoOverrides};

    /// Page editing only the push server string
    struct ServerPage;

    impl SettingsPage for ServerPage {
        type State = String;

        fn state_from_config(&self, config: &ServerConfig, _license: &License) -> String {
            config.email_settings.push_notification_server.clone()
        }

        fn config_from_state(&self, state: &String, config: &ServerConfig) -> ServerConfig {
            let mut config = config.clone();
            config.email_settings.push_notification_server = state.trim().to_string();
            config
        }

        fn can_save(&self, state: &String) -> bool {
            !state.is_empty()
        }
    }

    fn controller() -> AdminSettings<ServerPage> {
        let mut config = ServerConfig::default();
        config.email_settings.push_notification_server = "https://a.example.com".to_string();
        AdminSettings::new(ServerPage, config, License::default(), NoOverrides)
    }

    #[test]
    fn test_update_marks_dirty() {
        let mut c = controller();
        assert!(!c.save_needed());
        assert!(!c.can_save());

        c.update(|s| *s = "https://b.example.com".to_string());
        assert!(c.save_needed());
        assert!(c.can_save());
    }

    #[test]
    fn test_update_local_keeps_clean() {
        let mut c = controller();
        c.update_local(|s| s.push('/'));
        assert!(!c.save_needed());
    }

    #[test]
    fn test_save_resyncs_from_store() {
        let mut c = controller();
        let mut store = MemoryConfigStore::default();
        c.update(|s| *s = "  https://b.example.com  ".to_string());

        c.save(&mut store).unwrap();

        assert!(!c.save_needed());
        assert_eq!(c.state(), "https://b.example.com");
        assert_eq!(
            c.config().email_settings.push_notification_server,
            "https://b.example.com"
        );
    }

    #[test]
    fn test_failed_save_keeps_edits() {
        let mut c = controller();
        let mut store = MemoryConfigStore {
            fail_next: Some("disk full".to_string()),
            ..Default::default()
        };
        c.update(|s| *s = "https://b.example.com".to_string());

        let err = c.save(&mut store).unwrap_err();
        assert!(matches!(err, SaveError::Store(_)));
        assert_eq!(c.server_error(), Some("disk full"));
        assert!(c.save_needed());
        assert_eq!(c.state(), "https://b.example.com");
        assert!(store.saved.is_empty());
    }

    #[test]
    fn test_gate_refuses_save() {
        let mut c = controller();
        let mut store = MemoryConfigStore::default();
        c.update(|s| s.clear());

        assert!(!c.can_save());
        assert!(matches!(c.save(&mut store), Err(SaveError::NotSavable)));
        assert!(store.saved.is_empty());
    }

    #[test]
    fn test_cancel_restores_state() {
        let mut c = controller();
        c.update(|s| *s = "https://b.example.com".to_string());
        c.cancel();
        assert_eq!(c.state(), "https://a.example.com");
        assert!(!c.save_needed());
    }
}
