//! Use-Case: 3D-Vorschau öffnen, aufbauen und steuern.

use crate::app::AppState;
use crate::core::{build_wall_model, CameraPreset};

/// Öffnet das Vorschaufenster, startet die Render-Schleife und baut das Modell.
pub fn open(state: &mut AppState) {
    state.view3d.open = true;
    state.view3d.frame_loop.start();
    rebuild(state);
}

/// Schließt das Fenster und beendet die Render-Schleife.
pub fn close(state: &mut AppState) {
    state.view3d.open = false;
    state.view3d.frame_loop.cancel();
}

/// Baut das Wandmodell aus dem aktuellen Dokument und passt die Kamera ein.
///
/// Ungültige Wandhöhen (nicht positiv, nicht endlich) fallen auf den Standard zurück.
pub fn rebuild(state: &mut AppState) {
    let height = state.options.sanitize_wall_height(state.view3d.wall_height_m);
    state.view3d.wall_height_m = height;

    let model = build_wall_model(
        &state.document.plan,
        state.document.px_per_m,
        height,
        state.options.wall_thickness_m,
    );
    if let Some(bounds) = model.bounds() {
        state.view3d.camera.frame_bounds(&bounds);
    }
    log::info!(
        "3D-Modell gebaut: {} Wände, Höhe {:.2} m",
        model.walls.len(),
        height
    );
    state.view3d.model = Some(model);
}

/// Übernimmt die Wandhöhe aus dem Eingabefeld (Bereinigung beim nächsten Aufbau).
pub fn set_wall_height(state: &mut AppState, height_m: f64) {
    state.view3d.wall_height_m = height_m;
}

/// Wendet ein Kamera-Preset an.
pub fn apply_camera_preset(state: &mut AppState, preset: CameraPreset) {
    state.view3d.camera.apply_preset(preset);
}

/// Dreht die Kamera um den Zielpunkt.
pub fn orbit_camera(state: &mut AppState, delta_yaw: f64, delta_pitch: f64) {
    state.view3d.camera.orbit(delta_yaw, delta_pitch);
}

/// Zoomt die Kamera.
pub fn zoom_camera(state: &mut AppState, factor: f64) {
    state.view3d.camera.zoom(factor);
}

/// Merkt die Größe der 3D-Zeichenfläche (für Projektion und Export).
pub fn set_viewport(state: &mut AppState, size: [f32; 2]) {
    if size[0] >= 1.0 && size[1] >= 1.0 {
        state.view3d.viewport_size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn open_and_close_control_frame_loop() {
        let mut state = AppState::new();
        open(&mut state);
        assert!(state.view3d.open);
        assert!(state.view3d.frame_loop.is_running());
        assert!(state.view3d.model.is_some());

        close(&mut state);
        assert!(!state.view3d.open);
        assert!(!state.view3d.frame_loop.is_running());
    }

    #[test]
    fn invalid_height_falls_back_to_default() {
        let mut state = AppState::new();
        state.document_mut().plan.add_point(DVec2::new(0.0, 0.0));
        state.document_mut().plan.add_point(DVec2::new(200.0, 0.0));
        state.document_mut().plan.add_segment(0, 1, None);

        set_wall_height(&mut state, -4.0);
        rebuild(&mut state);

        assert_eq!(state.view3d.wall_height_m, 2.5);
        let model = state.view3d.model.as_ref().expect("Modell erwartet");
        assert_eq!(model.walls[0].size.y, 2.5);
    }
}
