//! Core domain types for push-settings

mod push;

pub use push::{
    PushContents, PushContentsSetting, PushServiceType, UnknownVariant, HOSTED_PUSH_SERVER,
    TEST_PUSH_SERVER,
};
