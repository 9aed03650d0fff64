//! 3D-Vorschaufenster: Wandhöhe, Kamera-Presets, Orbit/Zoom und Export.

use super::painter::paint_draw_list;
use crate::app::{AppIntent, AppState};
use crate::core::CameraPreset;
use crate::render;

const VIEWPORT_HEIGHT: f32 = 420.0;

/// Zeigt das 3D-Fenster, solange es geöffnet ist.
///
/// Gezeichnet wird nur, solange die Frame-Schleife läuft; jeder Frame fordert
/// den nächsten an.
pub fn show_view3d_window(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.view3d.open {
        return events;
    }

    let mut open = true;
    egui::Window::new("3D-Vorschau")
        .open(&mut open)
        .default_width(state.view3d.viewport_size[0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Wandhöhe:");
                let mut height = state.view3d.wall_height_m;
                if ui
                    .add(
                        egui::DragValue::new(&mut height)
                            .speed(0.01)
                            .max_decimals(2)
                            .suffix(" m"),
                    )
                    .changed()
                {
                    events.push(AppIntent::WallHeightChanged { height_m: height });
                }

                if ui
                    .add_enabled(
                        state.link.usable_measure().is_some(),
                        egui::Button::new("aus Messung"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::WallHeightFromMeasurementRequested);
                }

                if ui.button("Aktualisieren").clicked() {
                    events.push(AppIntent::View3dRefreshRequested);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Kamera:");
                for preset in [CameraPreset::Iso, CameraPreset::Top, CameraPreset::Front] {
                    if ui.button(preset.label()).clicked() {
                        events.push(AppIntent::CameraPresetRequested { preset });
                    }
                }

                ui.separator();

                if ui.button("PNG exportieren...").clicked() {
                    events.push(AppIntent::View3dExportRequested);
                }
            });

            let width = ui.available_width().max(1.0);
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(width, VIEWPORT_HEIGHT),
                egui::Sense::drag(),
            );

            let size = [rect.width(), rect.height()];
            if size != state.view3d.viewport_size {
                events.push(AppIntent::View3dViewportResized { size });
            }

            if response.dragged_by(egui::PointerButton::Primary) {
                let delta = response.drag_delta();
                if delta != egui::Vec2::ZERO {
                    events.push(AppIntent::CameraOrbitRequested {
                        delta: [delta.x, delta.y],
                    });
                }
            }

            if response.hovered() {
                let scroll = ui.input(|i| i.smooth_scroll_delta.y);
                if scroll != 0.0 {
                    events.push(AppIntent::CameraZoomRequested { scroll });
                }
            }

            if state.view3d.frame_loop.tick() {
                if let Some(model) = &state.view3d.model {
                    let list = render::build_wireframe(model, &state.view3d.camera, size);
                    paint_draw_list(&ui.painter_at(rect), rect.min, &list);
                }
                ui.ctx().request_repaint();
            }
        });

    if !open {
        events.push(AppIntent::View3dCloseRequested);
    }

    events
}
