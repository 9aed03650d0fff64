use crate::link::DeviceStatus;

/// Exportvariante des 2D-Plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// PNG in Canvas-Auflösung
    Png,
    /// JPEG in Canvas-Auflösung
    Jpeg,
    /// PNG mit HD-Faktor
    PngHd,
}

impl ExportKind {
    /// Dateiendung ohne Punkt.
    pub fn extension(self) -> &'static str {
        match self {
            ExportKind::Png | ExportKind::PngHd => "png",
            ExportKind::Jpeg => "jpg",
        }
    }

    /// Anzeigename für Menü und Dialog.
    pub fn label(self) -> &'static str {
        match self {
            ExportKind::Png => "PNG",
            ExportKind::Jpeg => "JPEG",
            ExportKind::PngHd => "PNG (HD)",
        }
    }
}

/// UI-bezogener Anwendungszustand (Meldungen, ausstehende Dialoge).
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Statusmeldung der letzten Aktion
    pub status_message: Option<String>,
    /// Fehlermeldung für das Alert-Fenster
    pub error_message: Option<String>,
    /// Pfad der zuletzt geladenen/gespeicherten Datei
    pub current_file_path: Option<String>,
    /// Öffnen-Dialog anzeigen
    pub show_open_dialog: bool,
    /// Speichern-Dialog anzeigen
    pub show_save_dialog: bool,
    /// Ausstehender Export-Dialog für den 2D-Plan
    pub pending_export: Option<ExportKind>,
    /// Ausstehender Export-Dialog für den 3D-Schnappschuss
    pub show_view3d_export_dialog: bool,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Zustand der Messverbindung.
#[derive(Debug, Clone, Default)]
pub struct LinkState {
    /// Zuletzt empfangene Messung in Metern
    pub last_measure_m: Option<f64>,
    /// Status des Messgeräts
    pub device: DeviceStatus,
    /// WebSocket-Verbindung zur Bridge steht
    pub bridge_connected: bool,
}

impl LinkState {
    /// Letzte Messung, falls positiv.
    pub fn usable_measure(&self) -> Option<f64> {
        self.last_measure_m.filter(|m| m.is_finite() && *m > 0.0)
    }
}
