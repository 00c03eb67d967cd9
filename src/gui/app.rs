//! Main application state for the admin console window

use eframe::egui::{self, Stroke};
use egui_commonmark::CommonMarkCache;

use crate::config::FileConfigStore;

use super::settings::{render_settings, Messages, PushSettingsPanel, SettingsState};
use super::theme::{ACCENT_YELLOW, BG_HIGHLIGHT, BG_PRIMARY, BG_SECONDARY, TEXT_PRIMARY};

/// Window hosting the push notification settings panel
pub struct AdminConsoleApp {
    panel: PushSettingsPanel,
    store: FileConfigStore,
    messages: Messages,
    commonmark_cache: CommonMarkCache,
    settings_status: Option<(String, bool)>,
    /// False until a config file exists on disk
    config_exists: bool,
}

impl AdminConsoleApp {
    pub fn new(
        panel: PushSettingsPanel,
        store: FileConfigStore,
        messages: Messages,
        config_exists: bool,
    ) -> Self {
        Self {
            panel,
            store,
            messages,
            commonmark_cache: CommonMarkCache::default(),
            settings_status: None,
            config_exists,
        }
    }

    /// Apply the dark theme to the egui context.
    pub(crate) fn apply_theme(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals.dark_mode = true;
        style.visuals.panel_fill = BG_PRIMARY;
        style.visuals.window_fill = BG_PRIMARY;
        style.visuals.extreme_bg_color = BG_SECONDARY;
        style.visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
        style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
        style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
        style.visuals.widgets.active.bg_fill = BG_HIGHLIGHT;
        style.visuals.selection.bg_fill = BG_HIGHLIGHT;
        style.visuals.selection.stroke = Stroke::new(1.0, TEXT_PRIMARY);
        ctx.set_style(style);
    }

    /// Render a banner while no config file exists yet
    fn render_init_banner(&self, ctx: &egui::Context) {
        if self.config_exists {
            return;
        }

        egui::TopBottomPanel::top("init_banner")
            .frame(egui::Frame::NONE.fill(ACCENT_YELLOW).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "No configuration found. Saving creates {}",
                        self.store.path().display()
                    ))
                    .color(BG_PRIMARY)
                    .strong(),
                );
            });
    }
}

impl eframe::App for AdminConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_init_banner(ctx);

        let mut state = SettingsState {
            panel: &mut self.panel,
            store: &mut self.store,
            messages: &self.messages,
            commonmark_cache: &mut self.commonmark_cache,
            settings_status: &mut self.settings_status,
        };
        render_settings(ctx, &mut state);

        // A successful save writes the file
        if !self.config_exists && matches!(self.settings_status, Some((_, false))) {
            self.config_exists = true;
        }
    }
}
