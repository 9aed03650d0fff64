//! Use-Case: Letzte Messung als Segment platzieren.

use crate::app::state::InteractionMode;
use crate::app::AppState;
use glam::DVec2;

/// Verankert den Startpunkt am zuletzt gesetzten Punkt und wechselt in den Platzier-Modus.
///
/// Gibt es noch keine Punkte, wird ein Startpunkt an der konfigurierten
/// Standardposition angelegt.
pub fn begin_placing(state: &mut AppState) {
    let Some(measure) = state.link.usable_measure() else {
        log::info!("Platzieren abgebrochen: keine gültige Messung");
        return;
    };

    if state.document.plan.points.is_empty() {
        let [x, y] = state.options.default_start_point;
        state.record_undo_snapshot();
        state.document_mut().plan.add_point(DVec2::new(x, y));
        log::info!("Kein Punkt vorhanden, Startpunkt bei ({}, {}) angelegt", x, y);
    }

    let start = state.document.plan.point_count() - 1;
    state.editor.mode = InteractionMode::Placing { start };
    state.ui.status_message = Some(format!("Richtung für {:.3} m wählen", measure));
}

/// Setzt einen neuen Punkt in Messlänge Richtung `target` und verbindet ihn mit dem Startpunkt.
///
/// Die Messung wird als verbindliche Länge am Segment gespeichert.
pub fn place_measured_segment(state: &mut AppState, target: DVec2) {
    let Some(start) = state.editor.mode.placing_start() else {
        return;
    };
    let Some(measure) = state.link.usable_measure() else {
        log::debug!("Platzieren ignoriert: keine gültige Messung");
        return;
    };
    let Some(anchor) = state.document.plan.point_pos(start) else {
        log::warn!("Startpunkt {} existiert nicht mehr, Platzieren beendet", start);
        state.editor.mode = InteractionMode::Idle;
        return;
    };
    let Some(direction) = (target - anchor).try_normalize() else {
        log::debug!("Klick auf dem Startpunkt: keine Richtung");
        return;
    };

    let end = anchor + direction * measure * state.document.px_per_m;

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    let doc = state.document_mut();
    let end_index = doc.plan.add_point(end);
    doc.plan.add_segment(start, end_index, Some(measure));

    state.editor.mode = InteractionMode::Idle;
    state.ui.status_message = Some(format!("Segment mit {:.3} m gesetzt", measure));
    log::info!("Messsegment {} -> {} ({:.3} m)", start, end_index, measure);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn begin_placing_creates_default_start_point() {
        let mut state = AppState::new();
        state.link.last_measure_m = Some(1.0);

        begin_placing(&mut state);

        assert_eq!(state.point_count(), 1);
        assert_eq!(
            state.document.plan.point_pos(0),
            Some(DVec2::new(200.0, 200.0))
        );
        assert_eq!(state.editor.mode, InteractionMode::Placing { start: 0 });
    }

    #[test]
    fn begin_placing_anchors_at_last_point() {
        let mut state = AppState::new();
        state.document_mut().plan.add_point(DVec2::new(0.0, 0.0));
        state.document_mut().plan.add_point(DVec2::new(50.0, 0.0));
        state.link.last_measure_m = Some(1.0);

        begin_placing(&mut state);

        assert_eq!(state.editor.mode, InteractionMode::Placing { start: 1 });
        assert!(!state.can_undo());
    }

    #[test]
    fn placement_uses_measurement_and_scale() {
        let mut state = AppState::new();
        state.document_mut().plan.add_point(DVec2::new(100.0, 100.0));
        state.link.last_measure_m = Some(1.5);
        state.editor.mode = InteractionMode::Placing { start: 0 };

        place_measured_segment(&mut state, DVec2::new(100.0, 400.0));

        let end = state.document.plan.point_pos(1).expect("neuer Punkt");
        assert_relative_eq!(end.x, 100.0);
        assert_relative_eq!(end.y, 400.0);
        assert_eq!(state.document.plan.segments[0].len_m, Some(1.5));
        assert_eq!(state.editor.mode, InteractionMode::Idle);
    }

    #[test]
    fn click_on_start_point_keeps_placing() {
        let mut state = AppState::new();
        state.document_mut().plan.add_point(DVec2::new(100.0, 100.0));
        state.link.last_measure_m = Some(1.0);
        state.editor.mode = InteractionMode::Placing { start: 0 };

        place_measured_segment(&mut state, DVec2::new(100.0, 100.0));

        assert_eq!(state.point_count(), 1);
        assert_eq!(state.editor.mode, InteractionMode::Placing { start: 0 });
    }
}
