//! Moduswechsel ohne Dokumentänderung.

use crate::app::state::InteractionMode;
use crate::app::AppState;
use glam::DVec2;

/// Merkt die aufgelöste Cursor-Position (für Vorschau und Status-Bar).
pub fn track_pointer(state: &mut AppState, pos: DVec2) {
    state.editor.cursor = Some(pos);
}

/// Schaltet zwischen Zeichnen und Löschen um. Platzieren und Ziehen werden dabei beendet.
pub fn toggle_delete_mode(state: &mut AppState) {
    state.editor.mode = match state.editor.mode {
        InteractionMode::Delete => InteractionMode::Idle,
        _ => InteractionMode::Delete,
    };
    log::info!("Modus: {}", state.editor.mode.label());
}

/// Kehrt aus jedem Modus in den Zeichenmodus zurück.
pub fn cancel_interaction(state: &mut AppState) {
    if state.editor.mode != InteractionMode::Idle {
        log::debug!("{} abgebrochen", state.editor.mode.label());
    }
    state.editor.mode = InteractionMode::Idle;
}

/// Setzt den Modus zurück, wenn er auf einen nicht mehr existierenden Punkt verweist.
pub fn revalidate_mode(state: &mut AppState) {
    let referenced = match state.editor.mode {
        InteractionMode::Placing { start } => Some(start),
        InteractionMode::Drag { point } => Some(point),
        InteractionMode::Idle | InteractionMode::Delete => None,
    };
    if let Some(index) = referenced {
        if state.document.plan.point_pos(index).is_none() {
            log::debug!("Modus verweist auf entfernten Punkt {}, zurück zu Idle", index);
            state.editor.mode = InteractionMode::Idle;
        }
    }
}
