//! Core-Domänenmodell: Grundriss, Dokumentformat, Snapping und 3D-Geometrie.
//!
//! Alles hier ist reine Logik ohne UI-Abhängigkeit.

pub mod camera3d;
pub mod document;
pub mod floor_plan;
pub mod polygon;
pub mod snap;
pub mod walls;

pub use camera3d::{Camera3D, CameraPreset};
pub use document::PlanDocument;
pub use floor_plan::{point_to_segment_distance, FloorPlan, PlanPoint, Segment};
pub use polygon::closed_polygon;
pub use snap::{SnapResult, SnapSettings};
pub use walls::{build_wall_model, Bounds3, FloorShape, WallBox, WallModel};
