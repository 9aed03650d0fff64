//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen für Dokumente sind hier zentralisiert.

use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::core::PlanDocument;
use anyhow::Context;
use std::sync::Arc;

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_open_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_dialog = true;
}

/// Lädt ein Dokument und ersetzt das aktuelle.
///
/// Der Undo-Snapshot wird erst nach erfolgreichem Parsen angelegt; bei
/// Fehlern bleibt das Dokument unverändert und die Meldung landet im UI-State.
pub fn load_document(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let result = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {}", path))
        .and_then(|json| PlanDocument::parse(&json, state.document.px_per_m));

    let document = match result {
        Ok(document) => document,
        Err(e) => {
            state.ui.error_message = Some(format!("Laden fehlgeschlagen: {:#}", e));
            return Err(e);
        }
    };

    log::info!(
        "Grundriss geladen: {} Punkte, {} Segmente, {} px/m",
        document.plan.point_count(),
        document.plan.segment_count(),
        document.px_per_m
    );

    state.record_undo_snapshot();
    state.document = Arc::new(document);
    state.editor.mode = InteractionMode::Idle;
    state.ui.current_file_path = Some(path);
    state.ui.status_message = Some("Grundriss geladen".to_string());
    Ok(())
}

/// Speichert das aktuelle Dokument als JSON.
pub fn save_document(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let json = state.document.to_json_pretty()?;
    if let Err(e) = std::fs::write(&path, json) {
        state.ui.error_message = Some(format!("Speichern fehlgeschlagen: {}", e));
        return Err(e).with_context(|| format!("Datei konnte nicht geschrieben werden: {}", path));
    }

    log::info!("Grundriss gespeichert: {}", path);
    state.ui.current_file_path = Some(path);
    state.ui.status_message = Some("Grundriss gespeichert".to_string());
    Ok(())
}

/// Vorgeschlagener Dateiname für Speichern-Dialoge.
pub fn suggested_file_name(state: &AppState) -> String {
    format!("{}.json", state.document.file_stem("plan"))
}
