use crate::app::frame_loop::FrameLoop;
use crate::core::{Camera3D, WallModel};

/// View-bezogener Zustand der 2D-Zeichenfläche.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Raster anzeigen
    pub show_grid: bool,
    /// Größe der Zeichenfläche in Pixeln
    pub canvas_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand.
    pub fn new(show_grid: bool, canvas_size: [f32; 2]) -> Self {
        Self {
            show_grid,
            canvas_size,
        }
    }
}

/// Zustand des 3D-Vorschaufensters.
#[derive(Debug, Clone)]
pub struct View3dState {
    /// Fenster sichtbar
    pub open: bool,
    /// Eingegebene Wandhöhe (wird beim Aufbau bereinigt)
    pub wall_height_m: f64,
    /// Orbit-Kamera
    pub camera: Camera3D,
    /// Zuletzt gebautes Wandmodell
    pub model: Option<WallModel>,
    /// Render-Schleife des Fensters
    pub frame_loop: FrameLoop,
    /// Letzte Größe der Zeichenfläche im Fenster
    pub viewport_size: [f32; 2],
}

impl View3dState {
    /// Erstellt den geschlossenen Vorschau-Zustand.
    pub fn new(wall_height_m: f64) -> Self {
        Self {
            open: false,
            wall_height_m,
            camera: Camera3D::default(),
            model: None,
            frame_loop: FrameLoop::new(),
            viewport_size: [640.0, 420.0],
        }
    }
}
