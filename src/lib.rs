//! push-settings - push notification settings for the admin console
//!
//! Edits the push notification slice of a team-messaging server
//! configuration: which relay delivers notifications (none, the hosted
//! service, the test service or a custom relay), the relay address, and how
//! much message content the notifications carry.
//!
//! ## Layers
//!
//! 1. **Config**: the server `config.json`, the license descriptor and
//!    `MM_*` environment overrides.
//! 2. **Panel model**: a generic admin settings controller plus the push page,
//!    which derives local state from the config and composes it back.
//! 3. **GUI / CLI**: an egui window and a headless `set` command, both driving
//!    the same panel handlers.

pub mod config;
pub mod domain;
pub mod gui;

pub use domain::*;
