//! Environment variable overrides
//!
//! A deployment can pin any configuration field with an environment variable
//! named `MM_<SECTION>_<FIELD>`, e.g. `MM_EMAILSETTINGS_PUSHNOTIFICATIONSERVER`.
//! Overridden fields are shown read-only in the admin panel.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::{fields, ServerConfig};
use crate::PushContents;

const ENV_PREFIX: &str = "MM_";

/// Answers whether a configuration field was supplied from outside the UI
pub trait OverrideSource {
    fn is_overridden(&self, field: &str) -> bool;
}

impl<F> OverrideSource for F
where
    F: Fn(&str) -> bool,
{
    fn is_overridden(&self, field: &str) -> bool {
        self(field)
    }
}

/// An override source where nothing is overridden
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideSource for NoOverrides {
    fn is_overridden(&self, _field: &str) -> bool {
        false
    }
}

/// Environment variable name for a dotted field path
pub fn env_var_name(field: &str) -> String {
    format!("{}{}", ENV_PREFIX, field.replace('.', "_").to_uppercase())
}

/// Snapshot of the environment overrides for the push notification fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    values: HashMap<String, String>,
}

impl EnvOverrides {
    /// Capture overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Capture overrides from an explicit list of variables
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let wanted: HashMap<String, &str> = fields::ALL
            .iter()
            .map(|field| (env_var_name(field), *field))
            .collect();

        let mut values = HashMap::new();
        for (name, value) in vars {
            if let Some(field) = wanted.get(name.as_ref()) {
                debug!("{} is set by environment", field);
                values.insert((*field).to_string(), value.into());
            }
        }

        Self { values }
    }

    /// Raw override value for a field, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Write overridden values into a loaded configuration.
    ///
    /// Values that cannot be parsed for their field are logged and skipped.
    pub fn apply(&self, config: &mut ServerConfig) {
        let email = &mut config.email_settings;

        if let Some(raw) = self.get(fields::SEND_PUSH_NOTIFICATIONS) {
            match raw.trim().parse::<bool>() {
                Ok(enabled) => email.send_push_notifications = enabled,
                Err(_) => warn!(
                    "Ignoring {}={:?}: expected true or false",
                    env_var_name(fields::SEND_PUSH_NOTIFICATIONS),
                    raw
                ),
            }
        }

        if let Some(raw) = self.get(fields::PUSH_NOTIFICATION_SERVER) {
            email.push_notification_server = raw.to_string();
        }

        if let Some(raw) = self.get(fields::PUSH_NOTIFICATION_CONTENTS) {
            match raw.parse::<PushContents>() {
                Ok(contents) => email.push_notification_contents = contents.into(),
                Err(e) => warn!(
                    "Ignoring {}: {}",
                    env_var_name(fields::PUSH_NOTIFICATION_CONTENTS),
                    e
                ),
            }
        }
    }
}

impl EnvOverrides {
    /// Put the stored value back into every overridden field.
    ///
    /// Used before writing a config that was loaded with [`apply`](Self::apply),
    /// so override values never end up in the file.
    pub fn restore(&self, config: &mut ServerConfig, stored: &ServerConfig) {
        let email = &mut config.email_settings;
        let stored = &stored.email_settings;

        if self.is_overridden(fields::SEND_PUSH_NOTIFICATIONS) {
            email.send_push_notifications = stored.send_push_notifications;
        }
        if self.is_overridden(fields::PUSH_NOTIFICATION_SERVER) {
            email.push_notification_server = stored.push_notification_server.clone();
        }
        if self.is_overridden(fields::PUSH_NOTIFICATION_CONTENTS) {
            email.push_notification_contents = stored.push_notification_contents.clone();
        }
    }
}

impl OverrideSource for EnvOverrides {
    fn is_overridden(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_name() {
        assert_eq!(
            env_var_name(fields::PUSH_NOTIFICATION_SERVER),
            "MM_EMAILSETTINGS_PUSHNOTIFICATIONSERVER"
        );
    }

    #[test]
    fn test_from_vars_picks_only_push_fields() {
        let overrides = EnvOverrides::from_vars([
            ("MM_EMAILSETTINGS_SENDPUSHNOTIFICATIONS", "true"),
            ("MM_SERVICESETTINGS_SITEURL", "https://chat.example.com"),
            ("PATH", "/usr/bin"),
        ]);
        assert!(overrides.is_overridden(fields::SEND_PUSH_NOTIFICATIONS));
        assert!(!overrides.is_overridden(fields::PUSH_NOTIFICATION_SERVER));
        assert!(!overrides.is_overridden("ServiceSettings.SiteURL"));
    }

    #[test]
    fn test_apply_writes_values() {
        let overrides = EnvOverrides::from_vars([
            ("MM_EMAILSETTINGS_SENDPUSHNOTIFICATIONS", "true"),
            ("MM_EMAILSETTINGS_PUSHNOTIFICATIONSERVER", "https://relay.example.com"),
            ("MM_EMAILSETTINGS_PUSHNOTIFICATIONCONTENTS", "full"),
        ]);
        let mut config = ServerConfig::default();
        overrides.apply(&mut config);

        assert!(config.email_settings.send_push_notifications);
        assert_eq!(
            config.email_settings.push_notification_server,
            "https://relay.example.com"
        );
        assert_eq!(
            config.email_settings.push_notification_contents,
            PushContents::FullMessage
        );
    }

    #[test]
    fn test_apply_skips_unparsable_values() {
        let overrides = EnvOverrides::from_vars([
            ("MM_EMAILSETTINGS_SENDPUSHNOTIFICATIONS", "yes"),
            ("MM_EMAILSETTINGS_PUSHNOTIFICATIONCONTENTS", "everything"),
        ]);
        let mut config = ServerConfig::default();
        config.email_settings.send_push_notifications = true;
        overrides.apply(&mut config);

        assert!(config.email_settings.send_push_notifications);
        assert_eq!(
            config.email_settings.push_notification_contents,
            PushContents::NameAndChannel
        );
        // Still reported as overridden so the UI keeps the field read-only
        assert!(overrides.is_overridden(fields::SEND_PUSH_NOTIFICATIONS));
    }

    #[test]
    fn test_restore_only_touches_overridden_fields() {
        let overrides =
            EnvOverrides::from_vars([("MM_EMAILSETTINGS_PUSHNOTIFICATIONCONTENTS", "full")]);
        let mut stored = ServerConfig::default();
        stored.email_settings.push_notification_server = "https://old.example.com".to_string();

        let mut edited = stored.clone();
        overrides.apply(&mut edited);
        edited.email_settings.push_notification_server = "https://new.example.com".to_string();
        overrides.restore(&mut edited, &stored);

        assert_eq!(
            edited.email_settings.push_notification_contents,
            PushContents::NameAndChannel
        );
        assert_eq!(
            edited.email_settings.push_notification_server,
            "https://new.example.com"
        );
    }

    #[test]
    fn test_closure_as_override_source() {
        let source = |field: &str| field == fields::PUSH_NOTIFICATION_CONTENTS;
        assert!(source.is_overridden(fields::PUSH_NOTIFICATION_CONTENTS));
        assert!(!NoOverrides.is_overridden(fields::PUSH_NOTIFICATION_CONTENTS));
    }
}
