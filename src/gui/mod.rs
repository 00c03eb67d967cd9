//! GUI module for the admin console
//!
//! Provides a native window hosting the push notification settings panel.
//! The panel model (`settings::push`, `settings::view`) has no egui
//! dependency and is also driven headlessly by the CLI.

pub mod app;
pub mod runner;
pub mod settings;
pub mod theme;

pub use app::AdminConsoleApp;
pub use runner::{load_panel, run_gui};
