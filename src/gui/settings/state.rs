//! Settings state struct for the GUI
//!
//! Borrows everything the settings view needs for one frame.

use egui_commonmark::CommonMarkCache;

use crate::config::ConfigStore;

use super::messages::Messages;
use super::push::PushSettingsPanel;

/// State for settings editing UI
pub struct SettingsState<'a> {
    pub panel: &'a mut PushSettingsPanel,
    pub store: &'a mut dyn ConfigStore,
    pub messages: &'a Messages,
    pub commonmark_cache: &'a mut CommonMarkCache,

    /// Last save outcome: message and whether it is an error
    pub settings_status: &'a mut Option<(String, bool)>,
}
