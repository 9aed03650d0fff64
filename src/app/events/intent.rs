use crate::app::state::ExportKind;
use crate::core::CameraPreset;
use crate::link::LinkEvent;
use glam::DVec2;

/// Eingaben aus UI und Messverbindung, ohne Mutationslogik.
///
/// Canvas-Positionen sind rohe Pixelkoordinaten; Snap und Ortho werden
/// erst im Intent-Mapping angewendet.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Zeichenfläche ───────────────────────────────────────────
    /// Cursor bewegt
    PointerMoved {
        /// Rohe Position
        pos: DVec2,
    },
    /// Ziehen auf der Zeichenfläche begonnen (Position = Druckpunkt)
    PointerPressed {
        /// Rohe Position
        pos: DVec2,
    },
    /// Maustaste losgelassen
    PointerReleased,
    /// Klick ohne Ziehen
    CanvasClicked {
        /// Rohe Position
        pos: DVec2,
        /// Shift gedrückt: freier Punkt statt Modus-Aktion
        shift: bool,
    },

    // ── Werkzeuge ───────────────────────────────────────────────
    /// Letzte Messung platzieren
    UseLastMeasurementRequested,
    /// Löschmodus umschalten
    DeleteModeToggled,
    /// Aktuelle Interaktion abbrechen (Escape)
    CancelRequested,
    /// Rückgängig
    UndoRequested,
    /// Wiederholen
    RedoRequested,
    /// Raster ein/aus
    GridToggled {
        /// Neuer Zustand
        enabled: bool,
    },
    /// Snapping ein/aus
    SnapToggled {
        /// Neuer Zustand
        enabled: bool,
    },
    /// Ortho-Modus ein/aus
    OrthoToggled {
        /// Neuer Zustand
        enabled: bool,
    },

    // ── Dokument ────────────────────────────────────────────────
    /// Maßstab geändert
    ScaleChanged {
        /// Pixel pro Meter
        px_per_m: f64,
    },
    /// Projekttitel geändert
    TitleChanged {
        /// Neuer Titel
        title: String,
    },
    /// Öffnen-Dialog anfordern
    OpenRequested,
    /// Speichern-Dialog anfordern
    SaveRequested,
    /// Datei zum Laden gewählt
    DocumentFileSelected {
        /// Dateipfad
        path: String,
    },
    /// Zielpfad zum Speichern gewählt
    SaveFilePathSelected {
        /// Dateipfad
        path: String,
    },
    /// Export-Dialog für den 2D-Plan anfordern
    ExportRequested {
        /// Exportvariante
        kind: ExportKind,
    },
    /// Exportziel gewählt
    ExportPathSelected {
        /// Dateipfad
        path: String,
        /// Exportvariante
        kind: ExportKind,
    },

    // ── Messverbindung ──────────────────────────────────────────
    /// Ereignis aus dem Verbindungs-Thread
    LinkEventReceived {
        /// Ereignis
        event: LinkEvent,
    },

    // ── 3D-Vorschau ─────────────────────────────────────────────
    /// Vorschaufenster öffnen
    View3dOpenRequested,
    /// Vorschaufenster schließen
    View3dCloseRequested,
    /// Modell neu aufbauen
    View3dRefreshRequested,
    /// Wandhöhe im Eingabefeld geändert
    WallHeightChanged {
        /// Höhe in Metern (roh)
        height_m: f64,
    },
    /// Wandhöhe aus letzter Messung übernehmen
    WallHeightFromMeasurementRequested,
    /// Kamera-Preset wählen
    CameraPresetRequested {
        /// Preset
        preset: CameraPreset,
    },
    /// Kamera per Ziehen drehen
    CameraOrbitRequested {
        /// Mausbewegung in Pixeln
        delta: [f32; 2],
    },
    /// Kamera per Mausrad zoomen
    CameraZoomRequested {
        /// Scroll-Betrag
        scroll: f32,
    },
    /// Größe der 3D-Zeichenfläche geändert
    View3dViewportResized {
        /// Größe in Pixeln
        size: [f32; 2],
    },
    /// Export-Dialog für den 3D-Schnappschuss anfordern
    View3dExportRequested,
    /// Exportziel für den 3D-Schnappschuss gewählt
    View3dExportPathSelected {
        /// Dateipfad
        path: String,
    },

    // ── Anwendung ───────────────────────────────────────────────
    /// Fehlermeldung bestätigt
    ErrorDismissed,
    /// Anwendung beenden
    ExitRequested,
}
