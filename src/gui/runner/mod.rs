//! GUI runner for the admin console
//!
//! Loads the server configuration and license, builds the push notification
//! panel and opens the window.

use std::path::Path;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use crate::config::{EnvOverrides, FileConfigStore, License};
use crate::gui::app::AdminConsoleApp;
use crate::gui::settings::{Messages, PushSettingsPanel};

/// Load everything the panel needs from disk and the environment
pub fn load_panel(
    config_path: &Path,
    license: License,
) -> Result<(PushSettingsPanel, FileConfigStore, bool)> {
    let overrides = EnvOverrides::from_env();
    let store = FileConfigStore::new(config_path, overrides.clone());
    let config_exists = config_path.exists();
    let config = store.load_or_default()?;

    let panel = PushSettingsPanel::push(config, license, overrides);
    Ok((panel, store, config_exists))
}

/// Run the admin console window
pub fn run_gui(config_path: &Path, license: License, messages: Messages) -> Result<()> {
    let (panel, store, config_exists) = load_panel(config_path, license)?;
    info!(
        "Opening push notification settings for {}",
        config_path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let title = messages.text(crate::gui::settings::MessageId::Title).to_string();
    let app = AdminConsoleApp::new(panel, store, messages, config_exists);

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            app.apply_theme(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
