//! Handler für Darstellungs- und Dokumenteinstellungen.

use crate::app::use_cases;
use crate::app::AppState;

/// Raster ein-/ausblenden.
pub fn set_grid_visible(state: &mut AppState, visible: bool) {
    use_cases::settings::set_grid_visible(state, visible);
}

/// Snapping ein-/ausschalten.
pub fn set_snap_enabled(state: &mut AppState, enabled: bool) {
    use_cases::settings::set_snap_enabled(state, enabled);
}

/// Ortho-Zwang ein-/ausschalten.
pub fn set_ortho_enabled(state: &mut AppState, enabled: bool) {
    use_cases::settings::set_ortho_enabled(state, enabled);
}

/// Setzt den Maßstab.
pub fn set_scale(state: &mut AppState, px_per_m: f64) {
    use_cases::settings::set_scale(state, px_per_m);
}

/// Setzt den Projekttitel.
pub fn set_title(state: &mut AppState, title: String) {
    use_cases::settings::set_title(state, title);
}
