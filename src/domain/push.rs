//! Push notification service types.
//!
//! The server can relay push notifications to the mobile apps through one of
//! two vendor-operated services, through a self-hosted relay, or not at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Hosted Push Notification Service (HPNS), requires a license entitlement
pub const HOSTED_PUSH_SERVER: &str = "https://push.mattermost.com";

/// Test Push Notification Service (TPNS), no entitlement required
pub const TEST_PUSH_SERVER: &str = "https://push-test.mattermost.com";

/// Which relay the server uses to deliver push notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PushServiceType {
    /// Do not send push notifications
    #[default]
    #[serde(rename = "off")]
    Off,
    /// Hosted service with uptime SLA
    #[serde(rename = "mhpns")]
    HostedService,
    /// Test service for non-production use
    #[serde(rename = "mtpns")]
    TestService,
    /// Manually entered relay location
    #[serde(rename = "custom")]
    Custom,
}

impl PushServiceType {
    /// All variants in dropdown order
    pub const ALL: [PushServiceType; 4] = [
        PushServiceType::Off,
        PushServiceType::HostedService,
        PushServiceType::TestService,
        PushServiceType::Custom,
    ];

    /// Stable identifier used by the CLI and the dropdown
    pub fn as_str(&self) -> &'static str {
        match self {
            PushServiceType::Off => "off",
            PushServiceType::HostedService => "mhpns",
            PushServiceType::TestService => "mtpns",
            PushServiceType::Custom => "custom",
        }
    }

    /// The fixed relay address for vendor-operated services.
    ///
    /// Returns `None` for `Off` and `Custom`, whose address is not pinned.
    pub fn well_known_server(&self) -> Option<&'static str> {
        match self {
            PushServiceType::HostedService => Some(HOSTED_PUSH_SERVER),
            PushServiceType::TestService => Some(TEST_PUSH_SERVER),
            PushServiceType::Off | PushServiceType::Custom => None,
        }
    }

    /// Returns true for the two vendor-operated relays
    pub fn is_vendor_service(&self) -> bool {
        self.well_known_server().is_some()
    }
}

impl fmt::Display for PushServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PushServiceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(PushServiceType::Off),
            "mhpns" => Ok(PushServiceType::HostedService),
            "mtpns" => Ok(PushServiceType::TestService),
            "custom" => Ok(PushServiceType::Custom),
            _ => Err(UnknownVariant {
                kind: "push service type",
                value: s.to_string(),
            }),
        }
    }
}

/// How much of a message is embedded in outgoing push payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PushContents {
    /// Only the sender name
    #[serde(rename = "generic_no_channel")]
    NameOnly,
    /// Sender and channel names, no message text
    #[default]
    #[serde(rename = "generic")]
    NameAndChannel,
    /// A message excerpt
    #[serde(rename = "full")]
    FullMessage,
}

impl PushContents {
    pub const ALL: [PushContents; 3] = [
        PushContents::NameOnly,
        PushContents::NameAndChannel,
        PushContents::FullMessage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PushContents::NameOnly => "generic_no_channel",
            PushContents::NameAndChannel => "generic",
            PushContents::FullMessage => "full",
        }
    }
}

impl fmt::Display for PushContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PushContents {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generic_no_channel" => Ok(PushContents::NameOnly),
            "generic" => Ok(PushContents::NameAndChannel),
            "full" => Ok(PushContents::FullMessage),
            _ => Err(UnknownVariant {
                kind: "push notification contents",
                value: s.to_string(),
            }),
        }
    }
}

/// The stored `PushNotificationContents` value.
///
/// Servers may write ids this panel has no option for. Those are kept
/// verbatim so a load/save cycle writes them back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PushContentsSetting {
    Known(PushContents),
    Unrecognized(String),
}

impl PushContentsSetting {
    /// The dropdown option this value selects, if any
    pub fn known(&self) -> Option<PushContents> {
        match self {
            PushContentsSetting::Known(contents) => Some(*contents),
            PushContentsSetting::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PushContentsSetting::Known(contents) => contents.as_str(),
            PushContentsSetting::Unrecognized(raw) => raw,
        }
    }
}

impl Default for PushContentsSetting {
    fn default() -> Self {
        PushContentsSetting::Known(PushContents::default())
    }
}

impl From<PushContents> for PushContentsSetting {
    fn from(contents: PushContents) -> Self {
        PushContentsSetting::Known(contents)
    }
}

impl PartialEq<PushContents> for PushContentsSetting {
    fn eq(&self, other: &PushContents) -> bool {
        self.known() == Some(*other)
    }
}

impl fmt::Display for PushContentsSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown enum identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_type_parses_ids() {
        assert_eq!("off".parse::<PushServiceType>().unwrap(), PushServiceType::Off);
        assert_eq!(
            " MHPNS ".parse::<PushServiceType>().unwrap(),
            PushServiceType::HostedService
        );
        assert_eq!(
            "mtpns".parse::<PushServiceType>().unwrap(),
            PushServiceType::TestService
        );
        assert!("hosted".parse::<PushServiceType>().is_err());
    }

    #[test]
    fn test_well_known_servers() {
        assert_eq!(
            PushServiceType::HostedService.well_known_server(),
            Some(HOSTED_PUSH_SERVER)
        );
        assert_eq!(
            PushServiceType::TestService.well_known_server(),
            Some(TEST_PUSH_SERVER)
        );
        assert!(PushServiceType::Custom.well_known_server().is_none());
        assert!(!PushServiceType::Off.is_vendor_service());
    }

    #[test]
    fn test_contents_serde_ids() {
        let json = serde_json::to_string(&PushContents::NameOnly).unwrap();
        assert_eq!(json, "\"generic_no_channel\"");
        let parsed: PushContents = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(parsed, PushContents::FullMessage);
    }

    #[test]
    fn test_unknown_contents_error_message() {
        let err = "everything".parse::<PushContents>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown push notification contents: everything");
    }

    #[test]
    fn test_contents_setting_keeps_unrecognized_ids() {
        let known: PushContentsSetting = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(known, PushContents::FullMessage);

        let raw: PushContentsSetting = serde_json::from_str("\"id_loaded\"").unwrap();
        assert_eq!(raw, PushContentsSetting::Unrecognized("id_loaded".to_string()));
        assert!(raw.known().is_none());
        assert_eq!(serde_json::to_string(&raw).unwrap(), "\"id_loaded\"");
    }
}
