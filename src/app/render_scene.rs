//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{PreviewLine, RenderScene};

/// Datumsformat der Kartusche.
const CARTOUCHE_DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Baut die Szene für die Bildschirmdarstellung.
pub fn build(state: &AppState) -> RenderScene {
    build_scaled(state, 1.0)
}

/// Baut die Szene mit Ausgabe-Skalierung.
pub fn build_scaled(state: &AppState, scale: f32) -> RenderScene {
    RenderScene {
        preview: preview_line(state),
        ..build_export(state, scale)
    }
}

/// Szene für den Bildexport: ohne Platzier-Vorschau.
pub fn build_export(state: &AppState, scale: f32) -> RenderScene {
    RenderScene {
        document: state.document.clone(),
        canvas_size: state.view.canvas_size,
        scale,
        show_grid: state.view.show_grid,
        preview: None,
        cartouche_date: chrono::Local::now()
            .format(CARTOUCHE_DATE_FORMAT)
            .to_string(),
        options: state.options.clone(),
    }
}

/// Vorschau: vom Startpunkt bis zum (gefangenen) Cursor, Länge in Metern.
fn preview_line(state: &AppState) -> Option<PreviewLine> {
    let start = state.editor.mode.placing_start()?;
    let from = state.document.plan.point_pos(start)?;
    let to = state.editor.cursor?;
    Some(PreviewLine {
        from,
        to,
        length_m: from.distance(to) / state.document.px_per_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::InteractionMode;
    use crate::render::{self, DrawPrimitive};
    use glam::DVec2;

    fn placing_state() -> AppState {
        let mut state = AppState::new();
        state.document_mut().px_per_m = 200.0;
        state.document_mut().plan.add_point(DVec2::new(100.0, 100.0));
        state.editor.cursor = Some(DVec2::new(500.0, 100.0));
        state
    }

    #[test]
    fn preview_needs_placing_mode_and_cursor() {
        let mut state = placing_state();
        assert!(build(&state).preview.is_none());

        state.editor.mode = InteractionMode::Placing { start: 0 };
        state.editor.cursor = None;
        assert!(build(&state).preview.is_none());
    }

    #[test]
    fn preview_follows_cursor_regardless_of_measurement() {
        let mut state = placing_state();
        state.editor.mode = InteractionMode::Placing { start: 0 };
        state.link.last_measure_m = Some(0.5);

        let scene = build(&state);
        let preview = scene.preview.expect("Vorschau erwartet");
        assert_eq!(preview.from, DVec2::new(100.0, 100.0));
        assert_eq!(preview.to, DVec2::new(500.0, 100.0));
        assert_eq!(preview.length_m, 2.0);

        let list = render::build_plan_draw_list(&scene, &render::BitmapTextMeasure);
        assert!(list.iter().any(|p| matches!(
            p,
            DrawPrimitive::Label { text, .. } if text == "preview: 2.000 m"
        )));
    }

    #[test]
    fn export_scene_omits_preview() {
        let mut state = placing_state();
        state.editor.mode = InteractionMode::Placing { start: 0 };

        for scale in [1.0, 4.0] {
            let scene = build_export(&state, scale);
            assert!(scene.preview.is_none());
            let list = render::build_plan_draw_list(&scene, &render::BitmapTextMeasure);
            assert!(!list
                .iter()
                .any(|p| matches!(p, DrawPrimitive::DashedLine { .. })));
        }
    }

    #[test]
    fn scaled_scene_reports_output_size() {
        let state = AppState::new();
        let scene = build_scaled(&state, 4.0);
        assert_eq!(scene.output_size(), [4800, 3200]);
    }
}
