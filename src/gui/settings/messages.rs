//! Localized text for the push notification panel
//!
//! Each message has a stable id and built-in English text. A catalog file
//! (flat JSON object of id → text) replaces individual messages.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Every message the panel displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    Title,
    PushOff,
    HostedOption,
    TestOption,
    CustomOption,
    PushOffHelp,
    HostedHelp,
    TestHelp,
    EnterpriseAppStoreHelp,
    AgreeHostedTerms,
    PushTitle,
    PushServerTitle,
    PushServerExample,
    NameOnlyContents,
    NameAndChannelContents,
    FullMessageContents,
    PushContentTitle,
    PushContentDesc,
    SetByEnv,
    Save,
    Cancel,
    Saved,
}

impl MessageId {
    pub const ALL: [MessageId; 22] = [
        MessageId::Title,
        MessageId::PushOff,
        MessageId::HostedOption,
        MessageId::TestOption,
        MessageId::CustomOption,
        MessageId::PushOffHelp,
        MessageId::HostedHelp,
        MessageId::TestHelp,
        MessageId::EnterpriseAppStoreHelp,
        MessageId::AgreeHostedTerms,
        MessageId::PushTitle,
        MessageId::PushServerTitle,
        MessageId::PushServerExample,
        MessageId::NameOnlyContents,
        MessageId::NameAndChannelContents,
        MessageId::FullMessageContents,
        MessageId::PushContentTitle,
        MessageId::PushContentDesc,
        MessageId::SetByEnv,
        MessageId::Save,
        MessageId::Cancel,
        MessageId::Saved,
    ];

    /// Catalog key
    pub fn id(&self) -> &'static str {
        match self {
            MessageId::Title => "admin.environment.pushNotifications",
            MessageId::PushOff => "admin.email.pushOff",
            MessageId::HostedOption => "admin.email.mhpns",
            MessageId::TestOption => "admin.email.mtpns",
            MessageId::CustomOption => "admin.email.selfPush",
            MessageId::PushOffHelp => "admin.email.pushOffHelp",
            MessageId::HostedHelp => "admin.email.mhpnsHelp",
            MessageId::TestHelp => "admin.email.mtpnsHelp",
            MessageId::EnterpriseAppStoreHelp => "admin.email.easHelp",
            MessageId::AgreeHostedTerms => "admin.email.agreeHPNS",
            MessageId::PushTitle => "admin.email.pushTitle",
            MessageId::PushServerTitle => "admin.email.pushServerTitle",
            MessageId::PushServerExample => "admin.email.pushServerEx",
            MessageId::NameOnlyContents => "admin.email.genericNoChannelPushNotification",
            MessageId::NameAndChannelContents => "admin.email.genericPushNotification",
            MessageId::FullMessageContents => "admin.email.fullPushNotification",
            MessageId::PushContentTitle => "admin.email.pushContentTitle",
            MessageId::PushContentDesc => "admin.email.pushContentDesc",
            MessageId::SetByEnv => "admin.settings.setByEnv",
            MessageId::Save => "admin.save",
            MessageId::Cancel => "admin.cancel",
            MessageId::Saved => "admin.saved",
        }
    }

    /// Built-in English text
    pub fn default_text(&self) -> &'static str {
        match self {
            MessageId::Title => "Push Notifications",
            MessageId::PushOff => "Do not send push notifications",
            MessageId::HostedOption => {
                "Use HPNS connection with uptime SLA to send notifications to iOS and Android apps"
            }
            MessageId::TestOption => {
                "Use TPNS connection to send notifications to iOS and Android apps"
            }
            MessageId::CustomOption => "Manually enter Push Notification Service location",
            MessageId::PushOffHelp => {
                "Please see [documentation on push notifications](!https://about.mattermost.com/default-mobile-push-notifications/) to learn more about setup options."
            }
            MessageId::HostedHelp => {
                "Download [Mattermost iOS app](!https://about.mattermost.com/mattermost-ios-app/) from iTunes. Download [Mattermost Android app](!https://about.mattermost.com/mattermost-android-app/) from Google Play. Learn more about the [Mattermost Hosted Push Notification Service](!https://about.mattermost.com/default-hpns/)."
            }
            MessageId::TestHelp => {
                "Download [Mattermost iOS app](!https://about.mattermost.com/mattermost-ios-app/) from iTunes. Download [Mattermost Android app](!https://about.mattermost.com/mattermost-android-app/) from Google Play. Learn more about the [Mattermost Test Push Notification Service](!https://about.mattermost.com/default-tpns/)."
            }
            MessageId::EnterpriseAppStoreHelp => {
                "Learn more about compiling and deploying your own mobile apps from an [Enterprise App Store](!https://about.mattermost.com/default-enterprise-app-store)."
            }
            MessageId::AgreeHostedTerms => {
                "I understand and accept the Mattermost Hosted Push Notification Service [Terms of Service](!https://about.mattermost.com/hpns-terms/) and [Privacy Policy](!https://about.mattermost.com/hpns-privacy/)."
            }
            MessageId::PushTitle => "Enable Push Notifications:",
            MessageId::PushServerTitle => "Push Notification Server:",
            MessageId::PushServerExample => "E.g.: \"https://push-test.mattermost.com\"",
            MessageId::NameOnlyContents => "Send generic description with only sender name",
            MessageId::NameAndChannelContents => {
                "Send generic description with sender and channel names"
            }
            MessageId::FullMessageContents => "Send full message snippet",
            MessageId::PushContentTitle => "Push Notification Contents:",
            MessageId::PushContentDesc => {
                "\"Send generic description with only sender name\" includes only the name of the person who sent the message in push notifications, with no information about channel name or message contents.\n\n\"Send generic description with sender and channel names\" includes the name of the person who sent the message and the channel it was sent in, but not the message text.\n\n\"Send full message snippet\" includes a message excerpt in push notifications, which may contain confidential information sent in messages. If your Push Notification Service is outside your firewall, it is *highly recommended* this option only be used with an \"https\" protocol to encrypt the connection."
            }
            MessageId::SetByEnv => {
                "This setting has been set through an environment variable. It cannot be changed through the System Console."
            }
            MessageId::Save => "Save",
            MessageId::Cancel => "Cancel",
            MessageId::Saved => "Settings saved.",
        }
    }
}

/// Message catalog with per-id replacements
#[derive(Debug, Clone, Default)]
pub struct Messages {
    overrides: HashMap<String, String>,
}

impl Messages {
    /// Built-in English catalog
    pub fn english() -> Self {
        Self::default()
    }

    /// Build a catalog from id → text pairs
    pub fn from_map(overrides: HashMap<String, String>) -> Self {
        for id in overrides.keys() {
            if !MessageId::ALL.iter().any(|m| m.id() == id) {
                warn!("Message catalog contains unknown id: {}", id);
            }
        }
        Self { overrides }
    }

    /// Load a catalog from a flat JSON object file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read message catalog: {}", path.display()))?;

        let overrides: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse message catalog: {}", path.display()))?;

        debug!(
            "Loaded {} messages from {}",
            overrides.len(),
            path.display()
        );
        Ok(Self::from_map(overrides))
    }

    /// Plain text for a message
    pub fn text(&self, id: MessageId) -> &str {
        self.overrides
            .get(id.id())
            .map(String::as_str)
            .unwrap_or_else(|| id.default_text())
    }

    /// Markdown text for a message, with new-window link markers removed
    pub fn markdown(&self, id: MessageId) -> String {
        normalize_links(self.text(id))
    }
}

/// Turn `[label](!url)` into `[label](url)`.
///
/// The `!` prefix asks for the link to open in a new window, which is the
/// only behavior a native viewer has anyway.
fn normalize_links(markdown: &str) -> String {
    markdown.replace("](!", "](")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_text() {
        let messages = Messages::english();
        assert_eq!(messages.text(MessageId::Title), "Push Notifications");
    }

    #[test]
    fn test_override_replaces_single_message() {
        let mut map = HashMap::new();
        map.insert(
            "admin.environment.pushNotifications".to_string(),
            "Push-Benachrichtigungen".to_string(),
        );
        let messages = Messages::from_map(map);
        assert_eq!(messages.text(MessageId::Title), "Push-Benachrichtigungen");
        assert_eq!(messages.text(MessageId::Save), "Save");
    }

    #[test]
    fn test_markdown_strips_new_window_marker() {
        let messages = Messages::english();
        let help = messages.markdown(MessageId::EnterpriseAppStoreHelp);
        assert!(help.contains("](https://about.mattermost.com/default-enterprise-app-store)"));
        assert!(!help.contains("](!"));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = MessageId::ALL.iter().map(|m| m.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), MessageId::ALL.len());
    }
}
