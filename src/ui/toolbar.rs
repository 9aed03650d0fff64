//! Toolbar: Messung, Modi, Hilfen, Maßstab und Titel.

use crate::app::{AppIntent, AppState, InteractionMode};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let has_measure = state.link.usable_measure().is_some();
            let placing = state.editor.mode.placing_start().is_some();
            if ui
                .add_enabled(
                    has_measure,
                    egui::Button::new("Letzte Messung setzen").selected(placing),
                )
                .clicked()
            {
                events.push(AppIntent::UseLastMeasurementRequested);
            }

            let deleting = state.editor.mode == InteractionMode::Delete;
            if ui
                .add(egui::Button::new("Löschen").selected(deleting))
                .clicked()
            {
                events.push(AppIntent::DeleteModeToggled);
            }

            ui.separator();

            let mut snap = state.editor.snap_enabled;
            if ui.checkbox(&mut snap, "Snap").changed() {
                events.push(AppIntent::SnapToggled { enabled: snap });
            }

            let mut ortho = state.editor.ortho_enabled;
            if ui.checkbox(&mut ortho, "Ortho").changed() {
                events.push(AppIntent::OrthoToggled { enabled: ortho });
            }

            let mut grid = state.view.show_grid;
            if ui.checkbox(&mut grid, "Raster").changed() {
                events.push(AppIntent::GridToggled { enabled: grid });
            }

            ui.separator();

            ui.label("Maßstab:");
            let mut px_per_m = state.document.px_per_m;
            if ui
                .add(
                    egui::DragValue::new(&mut px_per_m)
                        .range(1.0..=10_000.0)
                        .suffix(" px/m"),
                )
                .changed()
            {
                events.push(AppIntent::ScaleChanged { px_per_m });
            }

            ui.label("Titel:");
            let mut title = state.document.title.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut title).desired_width(180.0))
                .changed()
            {
                events.push(AppIntent::TitleChanged { title });
            }

            ui.separator();

            if ui
                .add_enabled(state.can_undo(), egui::Button::new("↶"))
                .on_hover_text("Rückgängig")
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(state.can_redo(), egui::Button::new("↷"))
                .on_hover_text("Wiederholen")
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }

            ui.separator();

            if ui.button("3D").clicked() {
                events.push(AppIntent::View3dOpenRequested);
            }
        });
    });

    events
}
