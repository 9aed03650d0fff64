//! Handler für Datei-Operationen (Öffnen, Speichern, Export).

use crate::app::state::ExportKind;
use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::file_io::request_open_file(state);
}

/// Öffnet den Datei-Speichern-Dialog.
pub fn request_save(state: &mut AppState) {
    use_cases::file_io::request_save_file(state);
}

/// Lädt ein Dokument aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_document(state, path)
}

/// Speichert das Dokument unter dem übergebenen Pfad.
pub fn save(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::save_document(state, path)
}

/// Öffnet den Export-Dialog für den 2D-Plan.
pub fn request_export(state: &mut AppState, kind: ExportKind) {
    use_cases::export::request_export(state, kind);
}

/// Exportiert den 2D-Plan als Bild.
pub fn export_plan(state: &mut AppState, path: String, kind: ExportKind) -> anyhow::Result<()> {
    use_cases::export::export_plan(state, &path, kind)
}
