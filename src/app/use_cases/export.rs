//! Use-Case: Bildexport des 2D-Plans und der 3D-Ansicht.

use crate::app::render_scene;
use crate::app::state::ExportKind;
use crate::app::AppState;
use crate::render;
use plan_raster::{encode, RasterFormat};
use std::path::Path;

/// Öffnet den Export-Dialog für den 2D-Plan.
pub fn request_export(state: &mut AppState, kind: ExportKind) {
    state.ui.pending_export = Some(kind);
}

/// Öffnet den Export-Dialog für die 3D-Ansicht.
pub fn request_view3d_export(state: &mut AppState) {
    state.ui.show_view3d_export_dialog = true;
}

/// Skalierung und Format einer Exportvariante.
pub fn export_settings(state: &AppState, kind: ExportKind) -> (u32, RasterFormat) {
    match kind {
        ExportKind::Png => (1, RasterFormat::Png),
        ExportKind::Jpeg => (
            1,
            RasterFormat::Jpeg {
                quality: state.options.export_jpeg_quality,
            },
        ),
        ExportKind::PngHd => (state.options.export_hd_factor.max(1), RasterFormat::Png),
    }
}

/// Vorgeschlagener Dateiname: Titel (Leerraum → `_`) oder `plan`.
pub fn suggested_plan_file_name(state: &AppState, kind: ExportKind) -> String {
    format!("{}.{}", state.document.file_stem("plan"), kind.extension())
}

/// Vorgeschlagener Dateiname für den 3D-Schnappschuss.
pub fn suggested_view3d_file_name(state: &AppState) -> String {
    format!("{}_3d.png", state.document.file_stem("plan"))
}

/// Rastert den 2D-Plan und schreibt ihn nach `path`.
pub fn export_plan(state: &mut AppState, path: &str, kind: ExportKind) -> anyhow::Result<()> {
    let (factor, format) = export_settings(state, kind);
    let scene = render_scene::build_export(state, factor as f32);
    let image = render::render_plan_image(&scene);

    if let Err(e) = encode::save(&image, Path::new(path), format) {
        state.ui.error_message = Some(format!("Export fehlgeschlagen: {:#}", e));
        return Err(e);
    }
    state.ui.status_message = Some(format!(
        "{} exportiert ({}×{})",
        kind.label(),
        image.width(),
        image.height()
    ));
    Ok(())
}

/// Rastert die aktuelle 3D-Ansicht als PNG.
///
/// Ohne gebautes Modell wird es vorher aus dem aktuellen Dokument erzeugt.
pub fn export_view3d(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    if state.view3d.model.is_none() {
        super::preview3d::rebuild(state);
    }
    let Some(model) = state.view3d.model.as_ref() else {
        anyhow::bail!("Kein 3D-Modell vorhanden");
    };
    let [w, h] = state.view3d.viewport_size;
    let size = [w.round().max(1.0) as u32, h.round().max(1.0) as u32];
    let image = render::render_view3d_image(model, &state.view3d.camera, size);

    if let Err(e) = encode::save(&image, Path::new(path), RasterFormat::Png) {
        state.ui.error_message = Some(format!("3D-Export fehlgeschlagen: {:#}", e));
        return Err(e);
    }
    state.ui.status_message = Some("3D-Ansicht exportiert".to_string());
    Ok(())
}
