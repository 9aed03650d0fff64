//! Datei-Dialoge und Fehlerfenster.

use crate::app::use_cases::{export, file_io};
use crate::app::{AppIntent, AppState, ExportKind, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Open-Datei-Dialog
    if state.ui.show_open_dialog {
        state.ui.show_open_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Grundriss", &["json"])
            .pick_file()
        {
            events.push(AppIntent::DocumentFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Save-Datei-Dialog
    if state.ui.show_save_dialog {
        state.ui.show_save_dialog = false;

        let default_name = state
            .ui
            .current_file_path
            .as_ref()
            .and_then(|p| std::path::Path::new(p).file_name())
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .unwrap_or_else(|| file_io::suggested_file_name(state));

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Grundriss", &["json"])
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::SaveFilePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Export 2D-Plan
    if let Some(kind) = state.ui.pending_export.take() {
        let (filter, extensions): (&str, &[&str]) = match kind {
            ExportKind::Png | ExportKind::PngHd => ("PNG", &["png"]),
            ExportKind::Jpeg => ("JPEG", &["jpg", "jpeg"]),
        };

        if let Some(path) = rfd::FileDialog::new()
            .add_filter(filter, extensions)
            .set_file_name(export::suggested_plan_file_name(state, kind))
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
                kind,
            });
        }
    }

    // Export 3D-Ansicht
    if state.ui.show_view3d_export_dialog {
        state.ui.show_view3d_export_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(export::suggested_view3d_file_name(state))
            .save_file()
        {
            events.push(AppIntent::View3dExportPathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}

/// Zeigt eine Fehlermeldung als modales Fenster.
pub fn show_error_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = ui_state.error_message.as_deref() else {
        return events;
    };

    egui::Window::new("Fehler")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(message);
                ui.add_space(10.0);

                if ui.button("OK").clicked() {
                    events.push(AppIntent::ErrorDismissed);
                }
            });
        });

    events
}
