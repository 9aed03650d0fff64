//! Use-Case: Darstellungs- und Dokumenteinstellungen.
//!
//! Maßstab und Titel werden ohne Undo-Snapshot übernommen.

use crate::app::AppState;

/// Raster ein-/ausblenden.
pub fn set_grid_visible(state: &mut AppState, visible: bool) {
    state.view.show_grid = visible;
}

/// Snapping ein-/ausschalten.
pub fn set_snap_enabled(state: &mut AppState, enabled: bool) {
    state.editor.snap_enabled = enabled;
}

/// Ortho-Zwang ein-/ausschalten.
pub fn set_ortho_enabled(state: &mut AppState, enabled: bool) {
    state.editor.ortho_enabled = enabled;
}

/// Setzt den Maßstab in Pixel pro Meter. Nicht positive Werte werden ignoriert.
pub fn set_scale(state: &mut AppState, px_per_m: f64) {
    if !(px_per_m.is_finite() && px_per_m > 0.0) {
        log::warn!("Ungültiger Maßstab ignoriert: {}", px_per_m);
        return;
    }
    if state.document.px_per_m != px_per_m {
        state.document_mut().px_per_m = px_per_m;
        log::debug!("Maßstab: {} px/m", px_per_m);
    }
}

/// Setzt den Projekttitel.
pub fn set_title(state: &mut AppState, title: String) {
    if state.document.title != title {
        state.document_mut().title = title;
    }
}
