//! Zeichenfläche: Pointer-Eingaben → `AppIntent`s, Szene → egui-Painter.

use super::keyboard;
use super::painter::{paint_draw_list, EguiTextMeasure};
use crate::app::{AppIntent, AppState};
use crate::render;
use crate::shared::RenderScene;
use glam::DVec2;

/// Rendert die Zeichenfläche im zentralen Panel und sammelt Eingaben.
pub fn render_canvas(ctx: &egui::Context, state: &AppState, scene: &RenderScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        events.extend(keyboard::collect_keyboard_intents(ui));

        egui::ScrollArea::both().show(ui, |ui| {
            let size = egui::vec2(state.view.canvas_size[0], state.view.canvas_size[1]);
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
            let to_canvas = |pos: egui::Pos2| {
                let local = pos - rect.min;
                DVec2::new(f64::from(local.x), f64::from(local.y))
            };

            collect_pointer_intents(ui, &response, to_canvas, &mut events);

            let painter = ui.painter_at(rect);
            let list = render::build_plan_draw_list(scene, &EguiTextMeasure::new(&painter));
            paint_draw_list(&painter, rect.min, &list);

            if response.hovered() {
                let cursor = if state.editor.mode == crate::app::InteractionMode::Delete {
                    egui::CursorIcon::NotAllowed
                } else {
                    egui::CursorIcon::Crosshair
                };
                ui.ctx().set_cursor_icon(cursor);
            }
        });
    });

    events
}

fn collect_pointer_intents(
    ui: &egui::Ui,
    response: &egui::Response,
    to_canvas: impl Fn(egui::Pos2) -> DVec2,
    events: &mut Vec<AppIntent>,
) {
    let (moving, latest, press_origin, modifiers) = ui.input(|i| {
        (
            i.pointer.is_moving(),
            i.pointer.latest_pos(),
            i.pointer.press_origin(),
            i.modifiers,
        )
    });

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(origin) = press_origin {
            events.push(AppIntent::PointerPressed {
                pos: to_canvas(origin),
            });
        }
    }

    // Beim Ziehen auch außerhalb der Fläche weiterverfolgen
    if moving && (response.hovered() || response.dragged()) {
        if let Some(pos) = latest {
            events.push(AppIntent::PointerMoved {
                pos: to_canvas(pos),
            });
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        events.push(AppIntent::PointerReleased);
    }

    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(AppIntent::CanvasClicked {
                pos: to_canvas(pos),
                shift: modifiers.shift,
            });
        }
    }
}
