//! Server configuration loading and management
//!
//! Only the push notification slice of the server configuration is modeled.
//! Everything else is carried through untouched so that a full `config.json`
//! survives a load/save cycle.

mod env;
mod io;
mod license;
mod store;

pub use env::{env_var_name, EnvOverrides, NoOverrides, OverrideSource};
pub use license::License;
pub use store::{ConfigStore, FileConfigStore, MemoryConfigStore};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::PushContentsSetting;

/// Dotted paths of the configuration fields edited by the push panel
pub mod fields {
    pub const SEND_PUSH_NOTIFICATIONS: &str = "EmailSettings.SendPushNotifications";
    pub const PUSH_NOTIFICATION_SERVER: &str = "EmailSettings.PushNotificationServer";
    pub const PUSH_NOTIFICATION_CONTENTS: &str = "EmailSettings.PushNotificationContents";

    /// All fields the panel reads and writes
    pub const ALL: [&str; 3] = [
        SEND_PUSH_NOTIFICATIONS,
        PUSH_NOTIFICATION_SERVER,
        PUSH_NOTIFICATION_CONTENTS,
    ];
}

/// Server configuration object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Email and push notification settings
    #[serde(rename = "EmailSettings", default)]
    pub email_settings: EmailSettings,

    /// Sections this crate does not edit
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// The `EmailSettings` section, which also hosts push notification delivery
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailSettings {
    /// Whether push notifications are sent at all
    #[serde(default)]
    pub send_push_notifications: bool,

    /// Relay endpoint URL
    #[serde(default)]
    pub push_notification_server: String,

    /// How much message detail is embedded in push payloads
    #[serde(default)]
    pub push_notification_contents: PushContentsSetting,

    /// Email settings unrelated to push delivery
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl ServerConfig {
    /// Parse a configuration from its JSON text
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}
