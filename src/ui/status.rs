//! Status-Bar am unteren Bildschirmrand.

use crate::app::use_cases::link::device_status_text;
use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Modus: {}", state.editor.mode.label()));

            ui.separator();

            ui.label(format!(
                "Punkte: {} | Segmente: {}",
                state.point_count(),
                state.segment_count()
            ));

            ui.separator();

            if let Some(cursor) = state.editor.cursor {
                ui.label(format!("Cursor: ({:.0}, {:.0})", cursor.x, cursor.y));
                ui.separator();
            }

            match state.link.last_measure_m {
                Some(value) => ui.label(format!("Messung: {:.4} m", value)),
                None => ui.label("Messung: –"),
            };

            ui.separator();

            let device_color = if state.link.device.connected && state.link.bridge_connected {
                egui::Color32::LIGHT_GREEN
            } else {
                egui::Color32::GRAY
            };
            ui.label(egui::RichText::new(device_status_text(state)).color(device_color));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }

            if let Some(ref path) = state.ui.current_file_path {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let filename = std::path::Path::new(path)
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or(path.as_str());
                    ui.label(filename);
                });
            }
        });
    });
}
