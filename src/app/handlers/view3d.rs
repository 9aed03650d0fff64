//! Handler für die 3D-Vorschau.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CameraPreset;

/// Öffnet die Vorschau.
pub fn open(state: &mut AppState) {
    use_cases::preview3d::open(state);
}

/// Schließt die Vorschau.
pub fn close(state: &mut AppState) {
    use_cases::preview3d::close(state);
}

/// Baut das Wandmodell neu.
pub fn rebuild(state: &mut AppState) {
    use_cases::preview3d::rebuild(state);
}

/// Übernimmt die Wandhöhe.
pub fn set_wall_height(state: &mut AppState, height_m: f64) {
    use_cases::preview3d::set_wall_height(state, height_m);
}

/// Wendet ein Kamera-Preset an.
pub fn apply_preset(state: &mut AppState, preset: CameraPreset) {
    use_cases::preview3d::apply_camera_preset(state, preset);
}

/// Dreht die Kamera.
pub fn orbit(state: &mut AppState, delta_yaw: f64, delta_pitch: f64) {
    use_cases::preview3d::orbit_camera(state, delta_yaw, delta_pitch);
}

/// Zoomt die Kamera.
pub fn zoom(state: &mut AppState, factor: f64) {
    use_cases::preview3d::zoom_camera(state, factor);
}

/// Merkt die Viewport-Größe.
pub fn set_viewport(state: &mut AppState, size: [f32; 2]) {
    use_cases::preview3d::set_viewport(state, size);
}

/// Öffnet den Export-Dialog der 3D-Ansicht.
pub fn request_export(state: &mut AppState) {
    use_cases::export::request_view3d_export(state);
}

/// Exportiert die 3D-Ansicht als PNG.
pub fn export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::export::export_view3d(state, &path)
}
