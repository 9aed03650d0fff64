//! Perspektivische Kamera für die 3D-Vorschau (Orbit um einen Zielpunkt).

use super::walls::Bounds3;
use glam::{DMat4, DVec2, DVec3, DVec4};

/// Vertikaler Öffnungswinkel in Grad.
pub const CAMERA_FOV_Y_DEG: f64 = 50.0;
/// Mindestabstand beim automatischen Einpassen.
pub const FRAMING_MIN_DISTANCE: f64 = 2.5;
/// Blickrichtung beim Einpassen (wird normiert).
pub const FRAMING_DIRECTION: DVec3 = DVec3::new(1.0, 0.8, 1.0);

/// Vordefinierte Kamerapositionen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPreset {
    /// Schräg von oben
    Iso,
    /// Draufsicht
    Top,
    /// Frontal auf Augenhöhe
    Front,
}

impl CameraPreset {
    /// Kameraposition des Presets.
    pub fn position(self) -> DVec3 {
        match self {
            CameraPreset::Iso => DVec3::new(2.5, 2.0, 2.5),
            // Minimaler z-Versatz, damit die Blickrichtung nicht parallel zur Up-Achse liegt
            CameraPreset::Top => DVec3::new(0.0, 6.0, 0.001),
            CameraPreset::Front => DVec3::new(0.0, 1.6, 4.0),
        }
    }

    /// Anzeigename für die UI.
    pub fn label(self) -> &'static str {
        match self {
            CameraPreset::Iso => "Iso",
            CameraPreset::Top => "Oben",
            CameraPreset::Front => "Vorne",
        }
    }
}

/// Kamera mit Position, Zielpunkt und Clip-Ebenen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera3D {
    /// Kameraposition in Metern
    pub position: DVec3,
    /// Orbit-Zielpunkt
    pub target: DVec3,
    /// Vertikaler Öffnungswinkel in Radiant
    pub fov_y: f64,
    /// Nahe Clip-Ebene
    pub near: f64,
    /// Ferne Clip-Ebene
    pub far: f64,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self {
            position: CameraPreset::Iso.position(),
            target: DVec3::new(0.0, 0.6, 0.0),
            fov_y: CAMERA_FOV_Y_DEG.to_radians(),
            near: 0.01,
            far: 200.0,
        }
    }
}

impl Camera3D {
    /// Setzt die Position eines Presets; der Zielpunkt bleibt.
    pub fn apply_preset(&mut self, preset: CameraPreset) {
        self.position = preset.position();
    }

    /// Passt die Kamera auf die Hülle ein.
    ///
    /// Abstand `max(2.5, 2 · größte Kante)` entlang `(1, 0.8, 1)`, Clip-Ebenen skaliert.
    pub fn frame_bounds(&mut self, bounds: &Bounds3) {
        let max_dim = bounds.size().max_element();
        let distance = FRAMING_MIN_DISTANCE.max(max_dim * 2.0);
        self.target = bounds.center();
        self.position = self.target + FRAMING_DIRECTION.normalize() * distance;
        self.near = (distance / 200.0).max(0.01);
        self.far = (distance * 20.0).max(200.0);
    }

    /// Dreht die Kamera um den Zielpunkt (Yaw um y, Pitch geklemmt).
    pub fn orbit(&mut self, delta_yaw: f64, delta_pitch: f64) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius <= f64::EPSILON {
            return;
        }
        let yaw = offset.x.atan2(offset.z) + delta_yaw;
        let pitch = (offset.y / radius).clamp(-1.0, 1.0).asin() + delta_pitch;
        let pitch = pitch.clamp(-1.55, 1.55);
        self.position = self.target
            + DVec3::new(
                radius * pitch.cos() * yaw.sin(),
                radius * pitch.sin(),
                radius * pitch.cos() * yaw.cos(),
            );
    }

    /// Zoomt entlang der Blickrichtung (`factor < 1` = näher).
    pub fn zoom(&mut self, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let offset = (self.position - self.target) * factor;
        if offset.length() > self.near * 2.0 {
            self.position = self.target + offset;
        }
    }

    /// View-Projection-Matrix für ein Seitenverhältnis.
    pub fn view_projection(&self, aspect: f64) -> DMat4 {
        let view = DMat4::look_at_rh(self.position, self.target, DVec3::Y);
        let proj = DMat4::perspective_rh(self.fov_y, aspect.max(1e-6), self.near, self.far);
        proj * view
    }

    /// Projiziert einen Weltpunkt in Viewport-Pixel (Ursprung oben links).
    ///
    /// `None`, wenn der Punkt hinter der nahen Clip-Ebene liegt.
    pub fn project(&self, point: DVec3, viewport: DVec2) -> Option<DVec2> {
        project_with(&self.view_projection(viewport.x / viewport.y), point, viewport)
    }
}

/// Projektion mit vorberechneter Matrix.
pub fn project_with(view_proj: &DMat4, point: DVec3, viewport: DVec2) -> Option<DVec2> {
    let clip: DVec4 = *view_proj * point.extend(1.0);
    if clip.w <= 1e-9 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(DVec2::new(
        (ndc.x * 0.5 + 0.5) * viewport.x,
        (1.0 - (ndc.y * 0.5 + 0.5)) * viewport.y,
    ))
}
