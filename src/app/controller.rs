//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichnen ===
            AppCommand::TrackPointer { pos } => handlers::editing::track_pointer(state, pos),
            AppCommand::AddPoint { pos } => handlers::editing::add_point(state, pos),
            AppCommand::BeginPlacing => handlers::editing::begin_placing(state),
            AppCommand::PlaceMeasuredSegment { target } => {
                handlers::editing::place_measured_segment(state, target)
            }
            AppCommand::BeginDrag { index } => handlers::editing::begin_drag(state, index),
            AppCommand::DragPointTo { pos } => handlers::editing::drag_point_to(state, pos),
            AppCommand::EndDrag => handlers::editing::end_drag(state),
            AppCommand::DeleteAt { pos } => handlers::editing::delete_at(state, pos),
            AppCommand::ToggleDeleteMode => handlers::editing::toggle_delete_mode(state),
            AppCommand::CancelInteraction => handlers::editing::cancel(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Darstellung & Dokument ===
            AppCommand::SetGridVisible { visible } => {
                handlers::view::set_grid_visible(state, visible)
            }
            AppCommand::SetSnapEnabled { enabled } => {
                handlers::view::set_snap_enabled(state, enabled)
            }
            AppCommand::SetOrthoEnabled { enabled } => {
                handlers::view::set_ortho_enabled(state, enabled)
            }
            AppCommand::SetScale { px_per_m } => handlers::view::set_scale(state, px_per_m),
            AppCommand::SetTitle { title } => handlers::view::set_title(state, title),

            // === Datei-I/O & Export ===
            AppCommand::RequestOpenDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveDialog => handlers::file_io::request_save(state),
            AppCommand::LoadDocument { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveDocument { path } => handlers::file_io::save(state, path)?,
            AppCommand::RequestExportDialog { kind } => {
                handlers::file_io::request_export(state, kind)
            }
            AppCommand::ExportPlan { path, kind } => {
                handlers::file_io::export_plan(state, path, kind)?
            }

            // === Messverbindung ===
            AppCommand::ApplyMeasurement { value_m } => {
                handlers::link::apply_measurement(state, value_m)
            }
            AppCommand::ApplyDeviceStatus { status } => {
                handlers::link::apply_device_status(state, status)
            }
            AppCommand::SetBridgeConnected { connected } => {
                handlers::link::set_bridge_connected(state, connected)
            }

            // === 3D-Vorschau ===
            AppCommand::OpenView3d => handlers::view3d::open(state),
            AppCommand::CloseView3d => handlers::view3d::close(state),
            AppCommand::RebuildView3d => handlers::view3d::rebuild(state),
            AppCommand::SetWallHeight { height_m } => {
                handlers::view3d::set_wall_height(state, height_m)
            }
            AppCommand::ApplyCameraPreset { preset } => {
                handlers::view3d::apply_preset(state, preset)
            }
            AppCommand::OrbitCamera {
                delta_yaw,
                delta_pitch,
            } => handlers::view3d::orbit(state, delta_yaw, delta_pitch),
            AppCommand::ZoomCamera { factor } => handlers::view3d::zoom(state, factor),
            AppCommand::SetView3dViewport { size } => handlers::view3d::set_viewport(state, size),
            AppCommand::RequestView3dExportDialog => handlers::view3d::request_export(state),
            AppCommand::ExportView3d { path } => handlers::view3d::export(state, path)?,

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::DismissError => handlers::dialog::dismiss_error(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
