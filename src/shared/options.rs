//! Zentrale Konfiguration für den Grundriss-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Breite der Zeichenfläche in Pixeln.
pub const CANVAS_WIDTH_PX: f32 = 1200.0;
/// Höhe der Zeichenfläche in Pixeln.
pub const CANVAS_HEIGHT_PX: f32 = 800.0;
/// Rasterabstand in Pixeln (Zeichnung und Grid-Snap).
pub const GRID_STEP_PX: f64 = 25.0;

// ── Snapping & Hit-Tests ────────────────────────────────────────────

/// Radius, innerhalb dessen auf einen bestehenden Punkt eingerastet wird.
pub const SNAP_POINT_RADIUS_PX: f64 = 10.0;
/// Toleranz für Punkt-Treffer (Drag-Start, Löschen).
pub const POINT_HIT_TOLERANCE_PX: f64 = 10.0;
/// Toleranz für Segment-Treffer beim Löschen.
pub const SEGMENT_HIT_TOLERANCE_PX: f64 = 8.0;

// ── Dokument ────────────────────────────────────────────────────────

/// Standard-Maßstab (Pixel pro Meter).
pub const DEFAULT_PX_PER_M: f64 = 200.0;
/// Startpunkt, falls beim Platzieren noch kein Punkt existiert.
pub const DEFAULT_START_POINT: [f64; 2] = [200.0, 200.0];
/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_CAPACITY: usize = 100;

// ── 3D-Vorschau ─────────────────────────────────────────────────────

/// Standard-Wandhöhe in Metern.
pub const DEFAULT_WALL_HEIGHT_M: f64 = 2.5;
/// Wandstärke in Metern.
pub const WALL_THICKNESS_M: f64 = 0.05;

// ── Export ──────────────────────────────────────────────────────────

/// Vergrößerungsfaktor für den HD-PNG-Export.
pub const EXPORT_HD_FACTOR: u32 = 4;
/// JPEG-Qualität (1..=100).
pub const EXPORT_JPEG_QUALITY: u8 = 95;

// ── Messverbindung ──────────────────────────────────────────────────

/// Adresse der lokalen Mess-Bridge.
pub const LINK_ADDRESS: &str = "ws://127.0.0.1:8765/ws";
/// Wartezeit vor einem erneuten Verbindungsversuch.
pub const LINK_RECONNECT_DELAY_MS: u64 = 1000;

// ── Farben ──────────────────────────────────────────────────────────

/// Rasterfarbe (RGBA: helles Grau).
pub const GRID_COLOR: [f32; 4] = [0.93, 0.93, 0.93, 1.0];
/// Segmentfarbe (RGBA: Dunkelgrau).
pub const SEGMENT_COLOR: [f32; 4] = [0.13, 0.13, 0.13, 1.0];
/// Punktfarbe (RGBA: Blau).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.47, 1.0, 1.0];
/// Farbe der gestrichelten Vorschau (RGBA: Orange).
pub const PREVIEW_COLOR: [f32; 4] = [1.0, 0.55, 0.0, 1.0];
/// Textfarbe für Beschriftungen (RGBA: Schwarz).
pub const LABEL_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als TOML neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Zeichenfläche ───────────────────────────────────────────
    /// Größe der Zeichenfläche in Pixeln (Breite, Höhe)
    pub canvas_size: [f32; 2],
    /// Rasterabstand in Pixeln
    pub grid_step_px: f64,
    /// Raster beim Start anzeigen
    pub show_grid: bool,
    /// Snapping beim Start aktiv
    pub snap_enabled: bool,
    /// Ortho-Modus beim Start aktiv
    pub ortho_enabled: bool,

    // ── Snapping & Hit-Tests ────────────────────────────────────
    /// Einrastradius für bestehende Punkte
    pub snap_point_radius_px: f64,
    /// Trefferradius für Punkte
    pub point_hit_tolerance_px: f64,
    /// Trefferabstand für Segmente
    pub segment_hit_tolerance_px: f64,

    // ── Dokument ────────────────────────────────────────────────
    /// Maßstab neuer Dokumente
    pub default_px_per_m: f64,
    /// Startpunkt beim Platzieren ohne vorhandene Punkte
    pub default_start_point: [f64; 2],
    /// Maximale Undo-Tiefe
    pub history_capacity: usize,

    // ── 3D-Vorschau ─────────────────────────────────────────────
    /// Standard-Wandhöhe in Metern
    pub default_wall_height_m: f64,
    /// Wandstärke in Metern
    pub wall_thickness_m: f64,

    // ── Export ──────────────────────────────────────────────────
    /// HD-Faktor für PNG-Export
    pub export_hd_factor: u32,
    /// JPEG-Qualität
    pub export_jpeg_quality: u8,

    // ── Messverbindung ──────────────────────────────────────────
    /// WebSocket-URL der Mess-Bridge (`ws://host:port/ws`)
    pub link_address: String,
    /// Wartezeit zwischen Verbindungsversuchen in Millisekunden
    pub link_reconnect_delay_ms: u64,

    // ── Farben ──────────────────────────────────────────────────
    /// Rasterfarbe
    pub grid_color: [f32; 4],
    /// Segmentfarbe
    pub segment_color: [f32; 4],
    /// Punktfarbe
    pub point_color: [f32; 4],
    /// Vorschaufarbe
    pub preview_color: [f32; 4],
    /// Beschriftungsfarbe
    pub label_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_size: [CANVAS_WIDTH_PX, CANVAS_HEIGHT_PX],
            grid_step_px: GRID_STEP_PX,
            show_grid: true,
            snap_enabled: true,
            ortho_enabled: false,
            snap_point_radius_px: SNAP_POINT_RADIUS_PX,
            point_hit_tolerance_px: POINT_HIT_TOLERANCE_PX,
            segment_hit_tolerance_px: SEGMENT_HIT_TOLERANCE_PX,
            default_px_per_m: DEFAULT_PX_PER_M,
            default_start_point: DEFAULT_START_POINT,
            history_capacity: HISTORY_CAPACITY,
            default_wall_height_m: DEFAULT_WALL_HEIGHT_M,
            wall_thickness_m: WALL_THICKNESS_M,
            export_hd_factor: EXPORT_HD_FACTOR,
            export_jpeg_quality: EXPORT_JPEG_QUALITY,
            link_address: LINK_ADDRESS.to_string(),
            link_reconnect_delay_ms: LINK_RECONNECT_DELAY_MS,
            grid_color: GRID_COLOR,
            segment_color: SEGMENT_COLOR,
            point_color: POINT_COLOR,
            preview_color: PREVIEW_COLOR,
            label_color: LABEL_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("plan-sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("plan_sketch.toml")
    }

    /// Gültige Wandhöhe: nicht-endliche oder nicht-positive Werte fallen auf den Standard zurück.
    pub fn sanitize_wall_height(&self, height: f64) -> f64 {
        if height.is_finite() && height > 0.0 {
            height
        } else {
            self.default_wall_height_m
        }
    }
}
