//! Use-Case: Bestehenden Punkt mit der Maus verschieben.

use crate::app::state::InteractionMode;
use crate::app::AppState;
use glam::DVec2;

/// Beginnt das Ziehen. Der Undo-Snapshot deckt die gesamte Zieh-Geste ab.
pub fn begin_drag(state: &mut AppState, index: usize) {
    if state.document.plan.point_pos(index).is_none() {
        log::warn!("Drag-Start auf ungültigem Punkt {}", index);
        return;
    }
    state.record_undo_snapshot();
    state.editor.mode = InteractionMode::Drag { point: index };
    log::debug!("Drag gestartet: Punkt {}", index);
}

/// Verschiebt den gezogenen Punkt.
pub fn drag_point_to(state: &mut AppState, pos: DVec2) {
    let Some(point) = state.editor.mode.drag_point() else {
        return;
    };
    if !state.document_mut().plan.move_point(point, pos) {
        log::warn!("Gezogener Punkt {} existiert nicht mehr", point);
        state.editor.mode = InteractionMode::Idle;
    }
}

/// Beendet das Ziehen.
pub fn end_drag(state: &mut AppState) {
    if let Some(point) = state.editor.mode.drag_point() {
        log::debug!("Drag beendet: Punkt {}", point);
        state.editor.mode = InteractionMode::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_drag_is_one_undo_step() {
        let mut state = AppState::new();
        state.document_mut().plan.add_point(DVec2::new(100.0, 100.0));

        begin_drag(&mut state, 0);
        drag_point_to(&mut state, DVec2::new(125.0, 100.0));
        drag_point_to(&mut state, DVec2::new(150.0, 125.0));
        end_drag(&mut state);

        assert_eq!(state.editor.mode, InteractionMode::Idle);
        assert_eq!(
            state.document.plan.point_pos(0),
            Some(DVec2::new(150.0, 125.0))
        );
        assert_eq!(state.history.undo_len(), 1);
    }

    #[test]
    fn drag_on_missing_point_is_ignored() {
        let mut state = AppState::new();
        begin_drag(&mut state, 3);
        assert_eq!(state.editor.mode, InteractionMode::Idle);
        assert!(!state.can_undo());
    }
}
