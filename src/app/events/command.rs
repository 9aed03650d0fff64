use crate::app::state::ExportKind;
use crate::core::CameraPreset;
use crate::link::DeviceStatus;
use glam::DVec2;

/// Mutierende Commands, die der Controller ausführt.
///
/// Positionen sind bereits aufgelöst (Snap und Ortho angewendet).
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Zeichenfläche ===
    /// Cursor-Position für die Vorschau merken
    TrackPointer { pos: DVec2 },
    /// Neuen Punkt anhängen
    AddPoint { pos: DVec2 },
    /// Platzieren der letzten Messung beginnen
    BeginPlacing,
    /// Messung in Richtung `target` platzieren
    PlaceMeasuredSegment { target: DVec2 },
    /// Ziehen eines Punkts beginnen
    BeginDrag { index: usize },
    /// Gezogenen Punkt verschieben
    DragPointTo { pos: DVec2 },
    /// Ziehen beenden
    EndDrag,
    /// Punkt oder Segment an der Position löschen
    DeleteAt { pos: DVec2 },
    /// Löschmodus umschalten
    ToggleDeleteMode,
    /// Zurück in den Zeichenmodus
    CancelInteraction,

    // === History ===
    /// Rückgängig
    Undo,
    /// Wiederholen
    Redo,

    // === Ansicht ===
    /// Raster ein/aus
    SetGridVisible { visible: bool },
    /// Snapping ein/aus
    SetSnapEnabled { enabled: bool },
    /// Ortho ein/aus
    SetOrthoEnabled { enabled: bool },

    // === Dokument ===
    /// Maßstab setzen
    SetScale { px_per_m: f64 },
    /// Titel setzen
    SetTitle { title: String },
    /// Öffnen-Dialog öffnen
    RequestOpenDialog,
    /// Speichern-Dialog öffnen
    RequestSaveDialog,
    /// Dokument laden
    LoadDocument { path: String },
    /// Dokument speichern
    SaveDocument { path: String },
    /// Export-Dialog öffnen
    RequestExportDialog { kind: ExportKind },
    /// 2D-Plan exportieren
    ExportPlan { path: String, kind: ExportKind },

    // === Messverbindung ===
    /// Neue Messung übernehmen
    ApplyMeasurement { value_m: f64 },
    /// Gerätestatus übernehmen
    ApplyDeviceStatus { status: DeviceStatus },
    /// Verbindungsstatus der Bridge setzen
    SetBridgeConnected { connected: bool },

    // === 3D-Vorschau ===
    /// Fenster öffnen und Modell bauen
    OpenView3d,
    /// Fenster schließen, Render-Schleife beenden
    CloseView3d,
    /// Modell neu bauen
    RebuildView3d,
    /// Wandhöhe setzen
    SetWallHeight { height_m: f64 },
    /// Kamera-Preset anwenden
    ApplyCameraPreset { preset: CameraPreset },
    /// Kamera drehen
    OrbitCamera { delta_yaw: f64, delta_pitch: f64 },
    /// Kamera zoomen
    ZoomCamera { factor: f64 },
    /// Größe der 3D-Zeichenfläche setzen
    SetView3dViewport { size: [f32; 2] },
    /// 3D-Export-Dialog öffnen
    RequestView3dExportDialog,
    /// 3D-Schnappschuss exportieren
    ExportView3d { path: String },

    // === Anwendung ===
    /// Fehlermeldung schließen
    DismissError,
    /// Anwendung beenden
    RequestExit,
}
