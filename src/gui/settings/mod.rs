//! Settings module for the GUI
//!
//! Renders the push notification settings view where admins can:
//! - Choose the relay used to deliver push notifications
//! - Accept the hosted service terms
//! - Enter a custom relay address
//! - Choose how much message content push payloads carry

pub mod admin;
mod helpers;
pub mod messages;
mod panel;
pub mod push;
mod save;
mod state;
pub mod view;

pub use admin::{AdminSettings, SaveError, SettingsPage};
pub use messages::{MessageId, Messages};
pub use panel::{render_push_notifications, render_settings};
pub use push::{
    compose_config, derive_local_state, EditError, PushEdits, PushSettings, PushSettingsPanel,
    PushSettingsState,
};
pub use state::SettingsState;
pub use view::{render, HelpText, PushSettingsView, ServiceTypeProfile};
