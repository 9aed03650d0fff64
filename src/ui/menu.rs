//! Top-Menü (Datei, Bearbeiten, Ansicht).

use crate::app::{AppIntent, AppState, ExportKind};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Öffnen...").clicked() {
                    events.push(AppIntent::OpenRequested);
                    ui.close();
                }

                if ui.button("Speichern...").clicked() {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                ui.separator();

                for kind in [ExportKind::Png, ExportKind::Jpeg, ExportKind::PngHd] {
                    if ui.button(format!("Export {}...", kind.label())).clicked() {
                        events.push(AppIntent::ExportRequested { kind });
                        ui.close();
                    }
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Bearbeiten", |ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Rückgängig (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(state.can_redo(), egui::Button::new("Wiederholen (Ctrl+Y)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                let mut show_grid = state.view.show_grid;
                if ui.checkbox(&mut show_grid, "Raster").changed() {
                    events.push(AppIntent::GridToggled { enabled: show_grid });
                }

                ui.separator();

                if ui.button("3D-Vorschau").clicked() {
                    events.push(AppIntent::View3dOpenRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
