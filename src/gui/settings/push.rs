//! Push notification settings page
//!
//! Maps three controls (service type, server address, contents) onto
//! `EmailSettings.SendPushNotifications`, `EmailSettings.PushNotificationServer`
//! and `EmailSettings.PushNotificationContents`. Selecting the hosted service
//! additionally requires accepting its terms before the page can be saved.

use tracing::debug;

use crate::config::{fields, License, ServerConfig};
use crate::{
    PushContents, PushContentsSetting, PushServiceType, HOSTED_PUSH_SERVER, TEST_PUSH_SERVER,
};

use super::admin::{AdminSettings, SettingsPage};

/// Local editable state of the push notification panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PushSettingsState {
    pub service_type: PushServiceType,
    pub server_address: String,
    /// Copied verbatim from the config, including ids without an option
    pub contents: PushContentsSetting,
    /// Hosted service terms acknowledgement
    pub tos_accepted: bool,
}

impl PushSettingsState {
    /// Switch relay type, pinning or clearing the server address as needed.
    ///
    /// Always resets the terms acknowledgement.
    pub fn on_service_type_change(&mut self, new_type: PushServiceType) {
        let previous = self.service_type;
        self.tos_accepted = false;

        match new_type {
            PushServiceType::HostedService => {
                self.server_address = HOSTED_PUSH_SERVER.to_string();
            }
            PushServiceType::TestService => {
                self.server_address = TEST_PUSH_SERVER.to_string();
            }
            PushServiceType::Custom if previous.is_vendor_service() => {
                // Force the admin to enter their own relay
                self.server_address.clear();
            }
            PushServiceType::Custom | PushServiceType::Off => {}
        }

        debug!("Push service type: {} -> {}", previous, new_type);
        self.service_type = new_type;
    }

    pub fn on_tos_accepted_change(&mut self, checked: bool) {
        self.tos_accepted = checked;
    }

    pub fn on_server_address_change(&mut self, address: impl Into<String>) {
        self.server_address = address.into();
    }

    pub fn on_contents_change(&mut self, contents: PushContents) {
        self.contents = contents.into();
    }

    /// The hosted service can only be saved once its terms are accepted
    pub fn can_save(&self) -> bool {
        self.service_type != PushServiceType::HostedService || self.tos_accepted
    }
}

/// Derive local panel state from the server configuration
pub fn derive_local_state(config: &ServerConfig, license: &License) -> PushSettingsState {
    let email = &config.email_settings;
    let server = email.push_notification_server.as_str();

    let (service_type, tos_accepted) = if !email.send_push_notifications {
        (PushServiceType::Off, false)
    } else if server == HOSTED_PUSH_SERVER && license.grants_hosted_push() {
        // A saved hosted configuration implies the terms were accepted before
        (PushServiceType::HostedService, true)
    } else if server == TEST_PUSH_SERVER {
        (PushServiceType::TestService, false)
    } else {
        (PushServiceType::Custom, false)
    };

    let server_address = service_type
        .well_known_server()
        .unwrap_or(server)
        .to_string();

    PushSettingsState {
        service_type,
        server_address,
        contents: email.push_notification_contents.clone(),
        tos_accepted,
    }
}

/// Write panel state into a copy of the server configuration
pub fn compose_config(state: &PushSettingsState, config: &ServerConfig) -> ServerConfig {
    let mut config = config.clone();
    let email = &mut config.email_settings;
    email.send_push_notifications = state.service_type != PushServiceType::Off;
    email.push_notification_server = state.server_address.trim().to_string();
    email.push_notification_contents = state.contents.clone();
    config
}

/// The push notification settings page
#[derive(Debug, Clone, Copy, Default)]
pub struct PushSettings;

impl SettingsPage for PushSettings {
    type State = PushSettingsState;

    fn state_from_config(&self, config: &ServerConfig, license: &License) -> PushSettingsState {
        derive_local_state(config, license)
    }

    fn config_from_state(&self, state: &PushSettingsState, config: &ServerConfig) -> ServerConfig {
        compose_config(state, config)
    }

    fn can_save(&self, state: &PushSettingsState) -> bool {
        state.can_save()
    }
}

/// Controller type for the push notification panel
pub type PushSettingsPanel = AdminSettings<PushSettings>;

impl AdminSettings<PushSettings> {
    /// Build the panel for a configuration and license
    pub fn push(
        config: ServerConfig,
        license: License,
        overrides: impl crate::config::OverrideSource + 'static,
    ) -> Self {
        AdminSettings::new(PushSettings, config, license, overrides)
    }

    pub fn on_service_type_change(&mut self, new_type: PushServiceType) {
        self.update(|state| state.on_service_type_change(new_type));
    }

    /// Toggling the acknowledgement alone does not make the page dirty
    pub fn on_tos_accepted_change(&mut self, checked: bool) {
        self.update_local(|state| state.on_tos_accepted_change(checked));
    }

    pub fn on_server_address_change(&mut self, address: impl Into<String>) {
        let address = address.into();
        self.update(|state| state.on_server_address_change(address));
    }

    pub fn on_contents_change(&mut self, contents: PushContents) {
        self.update(|state| state.on_contents_change(contents));
    }

    /// The service type dropdown drives two fields, so either override locks it
    pub fn is_service_type_set_by_env(&self) -> bool {
        self.is_set_by_env(fields::SEND_PUSH_NOTIFICATIONS)
            || self.is_set_by_env(fields::PUSH_NOTIFICATION_SERVER)
    }

    pub fn is_server_set_by_env(&self) -> bool {
        self.is_set_by_env(fields::PUSH_NOTIFICATION_SERVER)
    }

    pub fn is_contents_set_by_env(&self) -> bool {
        self.is_set_by_env(fields::PUSH_NOTIFICATION_CONTENTS)
    }
}

/// Error applying a batch of edits
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("{0} is set through an environment variable and cannot be changed here")]
    SetByEnv(&'static str),

    #[error("The hosted push notification service requires accepting its terms")]
    TermsNotAccepted,

    #[error("The license does not include the hosted push notification service")]
    HostedNotLicensed,
}

/// A batch of edits applied through the same handlers as the panel controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushEdits {
    pub service_type: Option<PushServiceType>,
    pub server_address: Option<String>,
    pub contents: Option<PushContents>,
    pub accept_terms: bool,
}

impl PushEdits {
    pub fn is_empty(&self) -> bool {
        self.service_type.is_none()
            && self.server_address.is_none()
            && self.contents.is_none()
            && !self.accept_terms
    }

    /// Apply edits in control order: service type, server, contents, terms.
    ///
    /// Editing an environment-overridden field, or choosing the hosted service
    /// without the license entitlement, is rejected before anything changes.
    /// A server address is ignored unless the relay is custom.
    pub fn apply(&self, panel: &mut PushSettingsPanel) -> Result<(), EditError> {
        if self.service_type == Some(PushServiceType::HostedService)
            && !panel.license().grants_hosted_push()
        {
            return Err(EditError::HostedNotLicensed);
        }
        if self.service_type.is_some() && panel.is_service_type_set_by_env() {
            return Err(EditError::SetByEnv(fields::SEND_PUSH_NOTIFICATIONS));
        }
        if self.server_address.is_some() && panel.is_server_set_by_env() {
            return Err(EditError::SetByEnv(fields::PUSH_NOTIFICATION_SERVER));
        }
        if self.contents.is_some() && panel.is_contents_set_by_env() {
            return Err(EditError::SetByEnv(fields::PUSH_NOTIFICATION_CONTENTS));
        }

        if let Some(service_type) = self.service_type {
            panel.on_service_type_change(service_type);
        }
        if let Some(address) = &self.server_address {
            // The address field is only editable for a custom relay
            if panel.state().service_type == PushServiceType::Custom {
                panel.on_server_address_change(address.clone());
            } else {
                debug!(
                    "Ignoring server address for {} relay",
                    panel.state().service_type
                );
            }
        }
        if let Some(contents) = self.contents {
            panel.on_contents_change(contents);
        }
        if self.accept_terms {
            panel.on_tos_accepted_change(true);
        }

        if !panel.state().can_save() {
            return Err(EditError::TermsNotAccepted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NoOverrides;

    fn config(send: bool, server: &str, contents: PushContents) -> ServerConfig {
        let mut config = ServerConfig::default();
        config.email_settings.send_push_notifications = send;
        config.email_settings.push_notification_server = server.to_string();
        config.email_settings.push_notification_contents = contents.into();
        config
    }

    #[test]
    fn test_off_ignores_server() {
        let state = derive_local_state(
            &config(false, HOSTED_PUSH_SERVER, PushContents::FullMessage),
            &License::with_hosted_push(),
        );
        assert_eq!(state.service_type, PushServiceType::Off);
        assert!(!state.tos_accepted);
        assert_eq!(state.server_address, HOSTED_PUSH_SERVER);
        assert_eq!(state.contents, PushContents::FullMessage);
    }

    #[test]
    fn test_hosted_without_entitlement_is_custom() {
        let state = derive_local_state(
            &config(true, HOSTED_PUSH_SERVER, PushContents::NameOnly),
            &License::default(),
        );
        assert_eq!(state.service_type, PushServiceType::Custom);
        assert_eq!(state.server_address, HOSTED_PUSH_SERVER);
        assert!(!state.tos_accepted);
    }

    #[test]
    fn test_service_change_from_custom_keeps_address() {
        let mut state = PushSettingsState {
            service_type: PushServiceType::Off,
            server_address: "https://relay.example.com".to_string(),
            ..Default::default()
        };
        state.on_service_type_change(PushServiceType::Custom);
        assert_eq!(state.server_address, "https://relay.example.com");

        state.on_service_type_change(PushServiceType::Off);
        assert_eq!(state.server_address, "https://relay.example.com");
    }

    #[test]
    fn test_tos_toggle_does_not_mark_dirty() {
        let mut panel = PushSettingsPanel::push(
            config(true, HOSTED_PUSH_SERVER, PushContents::NameAndChannel),
            License::with_hosted_push(),
            NoOverrides,
        );
        panel.on_tos_accepted_change(false);
        assert!(!panel.save_needed());
        assert!(!panel.state().can_save());
    }

    #[test]
    fn test_edits_ignore_server_for_vendor_relay() {
        let mut panel = PushSettingsPanel::push(
            config(false, "", PushContents::NameAndChannel),
            License::default(),
            NoOverrides,
        );
        let edits = PushEdits {
            service_type: Some(PushServiceType::TestService),
            server_address: Some("https://relay.example.com".to_string()),
            ..Default::default()
        };
        edits.apply(&mut panel).unwrap();
        assert_eq!(panel.state().server_address, TEST_PUSH_SERVER);
    }

    #[test]
    fn test_edits_reject_overridden_field() {
        let mut panel = PushSettingsPanel::push(
            config(true, TEST_PUSH_SERVER, PushContents::NameAndChannel),
            License::default(),
            |field: &str| field == fields::PUSH_NOTIFICATION_CONTENTS,
        );
        let edits = PushEdits {
            service_type: Some(PushServiceType::Off),
            contents: Some(PushContents::FullMessage),
            ..Default::default()
        };
        assert_eq!(
            edits.apply(&mut panel),
            Err(EditError::SetByEnv(fields::PUSH_NOTIFICATION_CONTENTS))
        );
        // Nothing applied
        assert_eq!(panel.state().service_type, PushServiceType::TestService);
        assert!(!panel.save_needed());
    }

    #[test]
    fn test_edits_require_terms_for_hosted() {
        let mut panel = PushSettingsPanel::push(
            config(false, "", PushContents::NameAndChannel),
            License::with_hosted_push(),
            NoOverrides,
        );
        let edits = PushEdits {
            service_type: Some(PushServiceType::HostedService),
            ..Default::default()
        };
        assert_eq!(edits.apply(&mut panel), Err(EditError::TermsNotAccepted));

        let edits = PushEdits {
            accept_terms: true,
            ..Default::default()
        };
        edits.apply(&mut panel).unwrap();
        assert!(panel.can_save());
    }

    #[test]
    fn test_edits_reject_hosted_without_entitlement() {
        let mut panel = PushSettingsPanel::push(
            config(false, "", PushContents::NameAndChannel),
            License::default(),
            NoOverrides,
        );
        let edits = PushEdits {
            service_type: Some(PushServiceType::HostedService),
            accept_terms: true,
            ..Default::default()
        };
        assert_eq!(edits.apply(&mut panel), Err(EditError::HostedNotLicensed));
        assert_eq!(panel.state().service_type, PushServiceType::Off);
        assert!(!panel.save_needed());
    }
}
