//! Admin console palette: dark sidebar-blue surfaces with light text.
//!
//! Status colors double as meaning: green for saved, red for save failures,
//! yellow for settings locked by the environment.

use eframe::egui::Color32;

// ─── Surfaces ────────────────────────────────────────────────────────────────

/// Window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(21, 31, 48);
/// Section frames and inputs
pub const BG_SECONDARY: Color32 = Color32::from_rgb(30, 44, 66);
/// Hovered and selected widgets
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(44, 64, 94);

// ─── Text ────────────────────────────────────────────────────────────────────

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(232, 236, 242);
/// Labels and help text
pub const TEXT_DIM: Color32 = Color32::from_rgb(160, 172, 190);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(108, 122, 144);

// ─── Accents ─────────────────────────────────────────────────────────────────

/// Links and focused controls
pub const ACCENT_CYAN: Color32 = Color32::from_rgb(56, 170, 230);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(62, 190, 120);
pub const ACCENT_RED: Color32 = Color32::from_rgb(230, 80, 80);
pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(240, 190, 60);
