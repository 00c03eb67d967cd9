//! UI helper functions for settings rendering
//!
//! Each control helper draws one entry of the control tree and returns the
//! new value when the user changed it this frame.

use eframe::egui::{self, RichText};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

use crate::gui::theme::{
    ACCENT_CYAN, ACCENT_GREEN, ACCENT_RED, ACCENT_YELLOW, BG_HIGHLIGHT, BG_SECONDARY, TEXT_DIM,
    TEXT_MUTED, TEXT_PRIMARY,
};

use super::view::{CheckboxView, DropdownView, TextFieldView};

const LABEL_WIDTH: f32 = 200.0;
const CONTROL_WIDTH: f32 = 420.0;

fn render_label(ui: &mut egui::Ui, label: &str) {
    ui.add_sized(
        [LABEL_WIDTH, 20.0],
        egui::Label::new(RichText::new(label).color(TEXT_MUTED)),
    );
}

/// Render a labeled dropdown
pub fn render_dropdown<T: Clone + PartialEq>(
    ui: &mut egui::Ui,
    view: &DropdownView<T>,
) -> Option<T> {
    let mut selected = view.value.clone();
    ui.horizontal(|ui| {
        render_label(ui, &view.label);
        ui.add_enabled_ui(view.enabled, |ui| {
            egui::ComboBox::from_id_salt(view.id)
                .selected_text(view.selected_text())
                .width(CONTROL_WIDTH)
                .show_ui(ui, |ui| {
                    for option in &view.options {
                        ui.selectable_value(&mut selected, option.value.clone(), option.text.as_str());
                    }
                });
        });
    });
    (selected != view.value).then_some(selected)
}

/// Render a labeled single-line text field
pub fn render_text_setting(ui: &mut egui::Ui, view: &TextFieldView) -> Option<String> {
    let mut value = view.value.clone();
    let mut changed = false;
    ui.horizontal(|ui| {
        render_label(ui, &view.label);
        let response = ui.add_enabled(
            view.enabled,
            egui::TextEdit::singleline(&mut value)
                .font(egui::TextStyle::Monospace)
                .text_color(TEXT_PRIMARY)
                .hint_text(view.placeholder.as_str())
                .desired_width(CONTROL_WIDTH),
        );
        changed = response.changed();
    });
    changed.then_some(value)
}

/// Render a checkbox whose label is markdown
pub fn render_checkbox_markdown(
    ui: &mut egui::Ui,
    view: &CheckboxView,
    commonmark_cache: &mut CommonMarkCache,
) -> Option<bool> {
    let mut checked = view.checked;
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.add_space(LABEL_WIDTH);
        changed = ui.checkbox(&mut checked, "").changed();
        render_markdown(ui, &view.label, commonmark_cache);
    });
    changed.then_some(checked)
}

/// Render help text indented under its control
pub fn render_help(ui: &mut egui::Ui, markdown: &str, commonmark_cache: &mut CommonMarkCache) {
    ui.horizontal(|ui| {
        ui.add_space(LABEL_WIDTH);
        ui.vertical(|ui| {
            ui.set_max_width(CONTROL_WIDTH);
            render_markdown(ui, markdown, commonmark_cache);
        });
    });
}

/// Render the note shown under environment-locked controls
pub fn render_set_by_env_note(ui: &mut egui::Ui, note: &str) {
    ui.horizontal(|ui| {
        ui.add_space(LABEL_WIDTH);
        ui.label(RichText::new(note).small().color(ACCENT_YELLOW));
    });
}

fn render_markdown(ui: &mut egui::Ui, text: &str, commonmark_cache: &mut CommonMarkCache) {
    ui.scope(|ui| {
        let visuals = &mut ui.style_mut().visuals;
        visuals.override_text_color = Some(TEXT_DIM);
        visuals.weak_text_color = Some(TEXT_MUTED);
        visuals.hyperlink_color = ACCENT_CYAN;
        visuals.code_bg_color = BG_HIGHLIGHT;
        CommonMarkViewer::new().show(ui, commonmark_cache, text);
    });
}

/// Render a status message (success or error)
pub fn render_status_message(ui: &mut egui::Ui, status: Option<(&str, bool)>) {
    if let Some((msg, is_error)) = status {
        let color = if is_error { ACCENT_RED } else { ACCENT_GREEN };
        ui.label(RichText::new(msg).color(color));
    }
}

/// Render a section frame with secondary background
pub fn render_section_frame<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, add_contents)
        .inner
}
