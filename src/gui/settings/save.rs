//! Settings save functionality
//!
//! Bridges the save/cancel buttons to the panel controller.

use super::admin::SaveError;
use super::messages::MessageId;
use super::state::SettingsState;

/// Save the panel through its config store and record the outcome
pub fn save_settings_to_config(state: &mut SettingsState<'_>) {
    match state.panel.save(&mut *state.store) {
        Ok(()) => {
            let saved = state.messages.text(MessageId::Saved).to_string();
            *state.settings_status = Some((saved, false));
        }
        // The button is disabled while the gate is closed
        Err(SaveError::NotSavable) => {}
        Err(e) => {
            *state.settings_status = Some((e.to_string(), true));
        }
    }
}

/// Discard unsaved edits
pub fn cancel_settings(state: &mut SettingsState<'_>) {
    state.panel.cancel();
    *state.settings_status = None;
}
