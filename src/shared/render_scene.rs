//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::PlanDocument;
use glam::DVec2;
use std::sync::Arc;

/// Gestrichelte Vorschau beim Platzieren einer Messung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewLine {
    /// Startpunkt (Canvas-Pixel)
    pub from: DVec2,
    /// Endpunkt in Messlänge entlang der Cursor-Richtung
    pub to: DVec2,
    /// Länge in Metern
    pub length_m: f64,
}

/// Read-only Daten für einen Render-Frame oder Export.
#[derive(Clone)]
pub struct RenderScene {
    /// Das aktuelle Dokument
    pub document: Arc<PlanDocument>,
    /// Größe der Zeichenfläche in Canvas-Pixeln
    pub canvas_size: [f32; 2],
    /// Ausgabe-Skalierung (1 = Bildschirm, >1 = HD-Export)
    pub scale: f32,
    /// Raster zeichnen
    pub show_grid: bool,
    /// Vorschau-Linie (nur im Platzier-Modus)
    pub preview: Option<PreviewLine>,
    /// Datumszeile der Kartusche
    pub cartouche_date: String,
    /// Laufzeit-Optionen für Farben und Raster
    pub options: EditorOptions,
}

impl RenderScene {
    /// Ausgabegröße in Pixeln (Canvas × Skalierung, aufgerundet).
    pub fn output_size(&self) -> [u32; 2] {
        [
            (self.canvas_size[0] * self.scale).ceil().max(1.0) as u32,
            (self.canvas_size[1] * self.scale).ceil().max(1.0) as u32,
        ]
    }
}
