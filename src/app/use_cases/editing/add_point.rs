//! Use-Case: Freien Punkt an einer Canvas-Position setzen.

use crate::app::AppState;
use glam::DVec2;

/// Hängt einen Punkt an der (bereits aufgelösten) Position an.
pub fn add_point(state: &mut AppState, pos: DVec2) {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    let index = state.document_mut().plan.add_point(pos);
    log::info!("Punkt {} bei ({:.1}, {:.1}) gesetzt", index, pos.x, pos.y);
}
