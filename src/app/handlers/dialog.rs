//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Schließt das Fehlerfenster.
pub fn dismiss_error(state: &mut AppState) {
    state.ui.error_message = None;
}
