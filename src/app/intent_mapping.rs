//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier werden rohe Canvas-Positionen über Ortho-Zwang und Snap-Engine
//! aufgelöst, abhängig vom aktuellen Interaktionsmodus.

use super::state::InteractionMode;
use super::{AppCommand, AppIntent, AppState};
use crate::core::snap;
use crate::link::{LinkEvent, LinkMessage};
use glam::DVec2;

/// Radiant pro Pixel Mausbewegung beim Orbit.
const ORBIT_RADIANS_PER_PX: f64 = 0.01;
/// Zoom-Faktor pro Scroll-Pixel.
const ZOOM_PER_SCROLL_PX: f64 = 0.002;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerMoved { pos } => {
            let resolved = resolve_pointer(state, pos);
            let mut commands = vec![AppCommand::TrackPointer { pos: resolved }];
            if state.editor.mode.drag_point().is_some() {
                commands.push(AppCommand::DragPointTo { pos: resolved });
            }
            commands
        }
        AppIntent::PointerPressed { pos } => {
            if state.editor.mode != InteractionMode::Idle {
                return vec![];
            }
            let snapped = snap::resolve(&state.document.plan, pos, &state.snap_settings());
            state
                .document
                .plan
                .find_point_at(snapped.position, state.options.point_hit_tolerance_px)
                .map(|index| vec![AppCommand::BeginDrag { index }])
                .unwrap_or_default()
        }
        AppIntent::PointerReleased => match state.editor.mode {
            InteractionMode::Drag { .. } => vec![AppCommand::EndDrag],
            _ => vec![],
        },
        AppIntent::CanvasClicked { pos, shift } => map_canvas_click(state, pos, shift),

        AppIntent::UseLastMeasurementRequested => {
            if state.link.usable_measure().is_some() {
                vec![AppCommand::BeginPlacing]
            } else {
                log::info!("Keine gültige Messung vorhanden");
                vec![]
            }
        }
        AppIntent::DeleteModeToggled => vec![AppCommand::ToggleDeleteMode],
        AppIntent::CancelRequested => vec![AppCommand::CancelInteraction],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::GridToggled { enabled } => vec![AppCommand::SetGridVisible { visible: enabled }],
        AppIntent::SnapToggled { enabled } => vec![AppCommand::SetSnapEnabled { enabled }],
        AppIntent::OrthoToggled { enabled } => vec![AppCommand::SetOrthoEnabled { enabled }],

        AppIntent::ScaleChanged { px_per_m } => vec![AppCommand::SetScale { px_per_m }],
        AppIntent::TitleChanged { title } => vec![AppCommand::SetTitle { title }],
        AppIntent::OpenRequested => vec![AppCommand::RequestOpenDialog],
        AppIntent::SaveRequested => vec![AppCommand::RequestSaveDialog],
        AppIntent::DocumentFileSelected { path } => vec![AppCommand::LoadDocument { path }],
        AppIntent::SaveFilePathSelected { path } => vec![AppCommand::SaveDocument { path }],
        AppIntent::ExportRequested { kind } => vec![AppCommand::RequestExportDialog { kind }],
        AppIntent::ExportPathSelected { path, kind } => vec![AppCommand::ExportPlan { path, kind }],

        AppIntent::LinkEventReceived { event } => match event {
            LinkEvent::Connected => vec![AppCommand::SetBridgeConnected { connected: true }],
            LinkEvent::Disconnected => vec![AppCommand::SetBridgeConnected { connected: false }],
            LinkEvent::Message(LinkMessage::Measure { value_m, .. }) => {
                if value_m.is_finite() {
                    vec![AppCommand::ApplyMeasurement { value_m }]
                } else {
                    log::warn!("Nicht-endliche Messung verworfen");
                    vec![]
                }
            }
            LinkEvent::Message(LinkMessage::BleStatus(status)) => {
                vec![AppCommand::ApplyDeviceStatus { status }]
            }
        },

        AppIntent::View3dOpenRequested => vec![AppCommand::OpenView3d],
        AppIntent::View3dCloseRequested => vec![AppCommand::CloseView3d],
        AppIntent::View3dRefreshRequested => vec![AppCommand::RebuildView3d],
        AppIntent::WallHeightChanged { height_m } => vec![AppCommand::SetWallHeight { height_m }],
        AppIntent::WallHeightFromMeasurementRequested => match state.link.usable_measure() {
            Some(height_m) => vec![
                AppCommand::SetWallHeight { height_m },
                AppCommand::RebuildView3d,
            ],
            None => {
                log::info!("Keine gültige Messung für die Wandhöhe");
                vec![]
            }
        },
        AppIntent::CameraPresetRequested { preset } => {
            vec![AppCommand::ApplyCameraPreset { preset }]
        }
        AppIntent::CameraOrbitRequested { delta } => vec![AppCommand::OrbitCamera {
            delta_yaw: -f64::from(delta[0]) * ORBIT_RADIANS_PER_PX,
            delta_pitch: f64::from(delta[1]) * ORBIT_RADIANS_PER_PX,
        }],
        AppIntent::CameraZoomRequested { scroll } => vec![AppCommand::ZoomCamera {
            factor: (-f64::from(scroll) * ZOOM_PER_SCROLL_PX).exp(),
        }],
        AppIntent::View3dViewportResized { size } => {
            vec![AppCommand::SetView3dViewport { size }]
        }
        AppIntent::View3dExportRequested => vec![AppCommand::RequestView3dExportDialog],
        AppIntent::View3dExportPathSelected { path } => vec![AppCommand::ExportView3d { path }],

        AppIntent::ErrorDismissed => vec![AppCommand::DismissError],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Klick auf die Zeichenfläche abhängig vom Modus.
fn map_canvas_click(state: &AppState, pos: DVec2, shift: bool) -> Vec<AppCommand> {
    let mode = state.editor.mode;

    if mode == InteractionMode::Delete {
        let snapped = snap::resolve(&state.document.plan, pos, &state.snap_settings());
        return vec![AppCommand::DeleteAt {
            pos: snapped.position,
        }];
    }

    let resolved = resolve_pointer(state, pos);
    if shift {
        return vec![AppCommand::AddPoint { pos: resolved }];
    }
    match mode {
        InteractionMode::Placing { .. } => vec![AppCommand::PlaceMeasuredSegment { target: resolved }],
        InteractionMode::Idle => vec![AppCommand::AddPoint { pos: resolved }],
        InteractionMode::Drag { .. } | InteractionMode::Delete => vec![],
    }
}

/// Effektive Cursor-Position: Ortho beim Platzieren, dann Snap.
///
/// Beim Ziehen wird der gezogene Punkt selbst nicht als Snap-Ziel verwendet.
pub(crate) fn resolve_pointer(state: &AppState, raw: DVec2) -> DVec2 {
    let plan = &state.document.plan;
    let settings = state.snap_settings();
    match state.editor.mode {
        InteractionMode::Placing { start } => {
            let constrained = match plan.point_pos(start) {
                Some(anchor) if state.editor.ortho_enabled => {
                    snap::constrain_orthogonal(anchor, raw)
                }
                _ => raw,
            };
            snap::resolve(plan, constrained, &settings).position
        }
        InteractionMode::Drag { point } => {
            snap::resolve_excluding(plan, raw, &settings, Some(point)).position
        }
        InteractionMode::Idle | InteractionMode::Delete => {
            snap::resolve(plan, raw, &settings).position
        }
    }
}
