//! Set command implementation

use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use push_settings::config::License;
use push_settings::gui::load_panel;
use push_settings::gui::settings::PushEdits;

/// Apply edits through the panel handlers and save the config
pub fn set_command(config_path: &Path, license: License, edits: PushEdits) -> Result<()> {
    if edits.is_empty() {
        bail!("Nothing to change. Pass --service-type, --server, --contents or --accept-terms.");
    }

    let (mut panel, mut store, _) = load_panel(config_path, license)?;
    edits.apply(&mut panel)?;

    if !panel.save_needed() {
        println!("Push notification settings unchanged.");
        return Ok(());
    }

    panel.save(&mut store)?;
    info!("Updated push notification settings in {}", config_path.display());

    let state = panel.state();
    println!(
        "Saved: service type {}, server {:?}, contents {}",
        state.service_type, state.server_address, state.contents
    );
    Ok(())
}
