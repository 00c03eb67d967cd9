//! License descriptor
//!
//! License payloads carry their flags as the strings `"true"` / `"false"`.
//! They are normalized to `bool` while deserializing; serializing writes the
//! string form back so the payload keeps its external shape.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The subset of license flags the push panel cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct License {
    #[serde(
        rename = "IsLicensed",
        default,
        deserialize_with = "deserialize_flag",
        serialize_with = "serialize_flag"
    )]
    pub is_licensed: bool,

    /// Entitlement to the hosted push notification service
    #[serde(
        rename = "MHPNS",
        default,
        deserialize_with = "deserialize_flag",
        serialize_with = "serialize_flag"
    )]
    pub hosted_push: bool,
}

impl License {
    /// A licensed server with the hosted push entitlement
    pub fn with_hosted_push() -> Self {
        Self {
            is_licensed: true,
            hosted_push: true,
        }
    }

    /// Whether the hosted push service can be selected
    pub fn grants_hosted_push(&self) -> bool {
        self.is_licensed && self.hosted_push
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Text(String),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    // Anything other than the exact string "true" is false
    Ok(match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(b) => b,
        RawFlag::Text(s) => s == "true",
    })
}

fn serialize_flag<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *value { "true" } else { "false" })
}
