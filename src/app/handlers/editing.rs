//! Handler für Zeichen-, Zieh- und Löschoperationen.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Merkt die aufgelöste Cursor-Position.
pub fn track_pointer(state: &mut AppState, pos: DVec2) {
    use_cases::editing::track_pointer(state, pos);
}

/// Setzt einen freien Punkt.
pub fn add_point(state: &mut AppState, pos: DVec2) {
    use_cases::editing::add_point(state, pos);
}

/// Startet das Platzieren der letzten Messung.
pub fn begin_placing(state: &mut AppState) {
    use_cases::editing::begin_placing(state);
}

/// Platziert das gemessene Segment in Richtung `target`.
pub fn place_measured_segment(state: &mut AppState, target: DVec2) {
    use_cases::editing::place_measured_segment(state, target);
}

/// Beginnt das Ziehen eines Punkts.
pub fn begin_drag(state: &mut AppState, index: usize) {
    use_cases::editing::begin_drag(state, index);
}

/// Verschiebt den gezogenen Punkt.
pub fn drag_point_to(state: &mut AppState, pos: DVec2) {
    use_cases::editing::drag_point_to(state, pos);
}

/// Beendet das Ziehen.
pub fn end_drag(state: &mut AppState) {
    use_cases::editing::end_drag(state);
}

/// Löscht Punkt oder Segment an der Position.
pub fn delete_at(state: &mut AppState, pos: DVec2) {
    use_cases::editing::delete_at(state, pos);
}

/// Schaltet den Löschmodus um.
pub fn toggle_delete_mode(state: &mut AppState) {
    use_cases::editing::toggle_delete_mode(state);
}

/// Bricht die laufende Interaktion ab.
pub fn cancel(state: &mut AppState) {
    use_cases::editing::cancel_interaction(state);
}
