//! Use-Case: Punkt oder Segment unter dem Cursor löschen.

use crate::app::AppState;
use glam::DVec2;

/// Löscht zuerst den nächsten Punkt im Trefferradius, sonst das nächste Segment.
///
/// Ohne Treffer bleibt das Dokument unverändert und es entsteht kein Undo-Eintrag.
pub fn delete_at(state: &mut AppState, pos: DVec2) {
    let plan = &state.document.plan;
    if let Some(index) = plan.find_point_at(pos, state.options.point_hit_tolerance_px) {
        state.record_undo_snapshot();
        state.document_mut().plan.remove_point(index);
        log::info!("Punkt {} gelöscht", index);
        return;
    }
    if let Some(index) = plan.find_segment_at(pos, state.options.segment_hit_tolerance_px) {
        state.record_undo_snapshot();
        state.document_mut().plan.remove_segment(index);
        log::info!("Segment {} gelöscht", index);
        return;
    }
    log::debug!("Löschen: nichts getroffen bei ({:.1}, {:.1})", pos.x, pos.y);
}
