//! Grundriss-Skizzierer mit Laser-Entfernungsmesser.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod link;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, ExportKind, InteractionMode, UiState,
    ViewState,
};
pub use core::{
    build_wall_model, closed_polygon, Camera3D, CameraPreset, FloorPlan, PlanDocument, PlanPoint,
    Segment, WallModel,
};
pub use link::{LinkEvent, LinkMessage, MeasurementLink};
pub use shared::{EditorOptions, RenderScene};
