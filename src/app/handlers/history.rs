//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::use_cases;
use crate::app::AppState;

/// Stellt den vorherigen Dokumentstand wieder her. Leerer Stack: keine Änderung.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    match state.history.pop_undo_with_current(current) {
        Some(prev) => restore(state, prev, "Undo"),
        None => log::debug!("Undo: Verlauf leer"),
    }
}

/// Stellt den zuletzt rückgängig gemachten Stand wieder her.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    match state.history.pop_redo_with_current(current) {
        Some(next) => restore(state, next, "Redo"),
        None => log::debug!("Redo: Verlauf leer"),
    }
}

fn restore(state: &mut AppState, snapshot: Snapshot, label: &str) {
    snapshot.apply_to(state);
    // Platzieren/Ziehen kann auf einen verschwundenen Punkt zeigen
    use_cases::editing::revalidate_mode(state);
    log::info!(
        "{}: {} Punkte, {} Segmente",
        label,
        state.point_count(),
        state.segment_count()
    );
}
