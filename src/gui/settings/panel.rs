//! Main settings panel rendering
//!
//! Contains the top-level render function for the push notification view.

use eframe::egui::{self, RichText, ScrollArea};

use crate::gui::theme::{ACCENT_GREEN, BG_PRIMARY, TEXT_DIM, TEXT_PRIMARY};
use crate::PushContentsSetting;

use super::helpers::{
    render_checkbox_markdown, render_dropdown, render_help, render_section_frame,
    render_set_by_env_note, render_status_message, render_text_setting,
};
use super::messages::MessageId;
use super::save::{cancel_settings, save_settings_to_config};
use super::state::SettingsState;
use super::view::render;

/// Render the settings configuration view
pub fn render_settings(ctx: &egui::Context, state: &mut SettingsState<'_>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
        .show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    render_push_notifications(ui, state);
                });
        });
}

/// Render the push notification settings section
pub fn render_push_notifications(ui: &mut egui::Ui, state: &mut SettingsState<'_>) {
    let view = render(state.panel, state.messages);
    let set_by_env = state.messages.text(MessageId::SetByEnv).to_string();

    ui.label(
        RichText::new(&view.title)
            .monospace()
            .size(18.0)
            .color(TEXT_PRIMARY),
    );
    ui.add_space(12.0);

    render_section_frame(ui, |ui| {
        if let Some(service_type) = render_dropdown(ui, &view.service_type) {
            state.panel.on_service_type_change(service_type);
        }
        if let Some(help) = &view.service_type.help {
            render_help(ui, help, state.commonmark_cache);
        }
        if view.service_type.set_by_env {
            render_set_by_env_note(ui, &set_by_env);
        }
        ui.add_space(8.0);

        if let Some(tos) = &view.tos {
            if let Some(checked) = render_checkbox_markdown(ui, tos, state.commonmark_cache) {
                state.panel.on_tos_accepted_change(checked);
            }
            ui.add_space(8.0);
        }

        if let Some(address) = render_text_setting(ui, &view.server) {
            state.panel.on_server_address_change(address);
        }
        if let Some(help) = &view.server.help {
            render_help(ui, help, state.commonmark_cache);
        }
        if view.server.set_by_env {
            render_set_by_env_note(ui, &set_by_env);
        }
        ui.add_space(8.0);

        if let Some(PushContentsSetting::Known(contents)) = render_dropdown(ui, &view.contents) {
            state.panel.on_contents_change(contents);
        }
        if let Some(help) = &view.contents.help {
            render_help(ui, help, state.commonmark_cache);
        }
        if view.contents.set_by_env {
            render_set_by_env_note(ui, &set_by_env);
        }
    });

    // Action buttons
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        let save_label = RichText::new(state.messages.text(MessageId::Save)).color(ACCENT_GREEN);
        let save = ui.add_enabled(view.save_enabled, egui::Button::new(save_label));
        if save.clicked() {
            save_settings_to_config(state);
        }

        ui.add_space(8.0);

        let cancel_label = RichText::new(state.messages.text(MessageId::Cancel)).color(TEXT_DIM);
        let cancel = ui.add_enabled(view.cancel_enabled, egui::Button::new(cancel_label));
        if cancel.clicked() {
            cancel_settings(state);
        }
    });

    ui.add_space(8.0);
    render_status_message(
        ui,
        state
            .settings_status
            .as_ref()
            .map(|(msg, is_error)| (msg.as_str(), *is_error)),
    );
}
