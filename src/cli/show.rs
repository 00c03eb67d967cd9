//! Show command implementation

use anyhow::Result;
use std::path::Path;

use push_settings::config::License;
use push_settings::gui::load_panel;
use push_settings::gui::settings::{render, Messages};

/// Print the push notification settings derived from the config
pub fn show_command(config_path: &Path, license: License, messages: &Messages) -> Result<()> {
    let (panel, _store, config_exists) = load_panel(config_path, license)?;
    let view = render(&panel, messages);
    let state = panel.state();

    if !config_exists {
        println!("No config at {} (showing defaults)\n", config_path.display());
    }

    println!("{}\n", view.title);
    print_row(
        &view.service_type.label,
        &format!("{} ({})", view.service_type.selected_text(), state.service_type),
        view.service_type.set_by_env,
    );
    if view.tos.is_some() {
        let accepted = if state.tos_accepted { "accepted" } else { "not accepted" };
        print_row("Hosted service terms:", accepted, false);
    }
    print_row(&view.server.label, &state.server_address, view.server.set_by_env);
    print_row(
        &view.contents.label,
        &format!("{} ({})", view.contents.selected_text(), state.contents),
        view.contents.set_by_env,
    );

    if !state.can_save() {
        println!("\nThe hosted service terms must be accepted before saving.");
    }

    Ok(())
}

fn print_row(label: &str, value: &str, set_by_env: bool) {
    let note = if set_by_env { "  [set by environment]" } else { "" };
    println!("  {:<30} {}{}", label, value, note);
}
