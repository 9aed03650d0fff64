//! Wandmodell für die 3D-Vorschau.
//!
//! Weltkoordinaten: Meter, y nach oben, der Boden liegt auf y = 0.
//! Canvas-x wird zu Welt-x, Canvas-y zu negiertem Welt-z (rechtshändige Bodenebene),
//! zentriert auf den Punkt-Schwerpunkt.

use super::polygon::closed_polygon;
use super::FloorPlan;
use glam::{DQuat, DVec2, DVec3};

/// Kürzere Wände werden nicht erzeugt.
pub const MIN_WALL_LENGTH_M: f64 = 1e-6;

/// Quaderförmige Wand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallBox {
    /// Mittelpunkt (y = Höhe / 2)
    pub center: DVec3,
    /// Ausdehnung: x = Länge, y = Höhe, z = Stärke
    pub size: DVec3,
    /// Drehung um die y-Achse in Radiant
    pub yaw: f64,
}

impl WallBox {
    /// Die acht Eckpunkte in Weltkoordinaten.
    ///
    /// Reihenfolge: unten (0..4), dann oben (4..8), jeweils umlaufend.
    pub fn corners(&self) -> [DVec3; 8] {
        let half = self.size * 0.5;
        let rotation = DQuat::from_rotation_y(self.yaw);
        let local = [
            DVec3::new(-half.x, -half.y, -half.z),
            DVec3::new(half.x, -half.y, -half.z),
            DVec3::new(half.x, -half.y, half.z),
            DVec3::new(-half.x, -half.y, half.z),
            DVec3::new(-half.x, half.y, -half.z),
            DVec3::new(half.x, half.y, -half.z),
            DVec3::new(half.x, half.y, half.z),
            DVec3::new(-half.x, half.y, half.z),
        ];
        local.map(|corner| self.center + rotation * corner)
    }
}

/// Bodenfläche innerhalb eines geschlossenen Umrisses (y = 0).
#[derive(Debug, Clone, PartialEq)]
pub struct FloorShape {
    /// Umriss in der Bodenebene als (x, z)
    pub outline: Vec<DVec2>,
}

/// Achsenparallele Hülle in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    /// Minimum je Achse
    pub min: DVec3,
    /// Maximum je Achse
    pub max: DVec3,
}

impl Bounds3 {
    fn from_point(p: DVec3) -> Self {
        Self { min: p, max: p }
    }

    fn include(&mut self, p: DVec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Mittelpunkt der Hülle.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Kantenlängen der Hülle.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }
}

/// Ergebnis des Wall-Builders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallModel {
    /// Alle Wände
    pub walls: Vec<WallBox>,
    /// Boden, falls der Grundriss ein geschlossener Umriss ist
    pub floor: Option<FloorShape>,
}

impl WallModel {
    /// Gibt `true` zurück, wenn weder Wände noch Boden existieren.
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty() && self.floor.is_none()
    }

    /// Gemeinsame Hülle aus Wänden und Boden.
    pub fn bounds(&self) -> Option<Bounds3> {
        let floor_points = self
            .floor
            .iter()
            .flat_map(|floor| floor.outline.iter())
            .map(|p| DVec3::new(p.x, 0.0, p.y));
        let wall_points = self.walls.iter().flat_map(|wall| wall.corners());

        let mut points = floor_points.chain(wall_points);
        let mut bounds = Bounds3::from_point(points.next()?);
        for p in points {
            bounds.include(p);
        }
        Some(bounds)
    }
}

/// Abbildung Canvas-Pixel → Bodenebene (Meter, zentriert).
#[derive(Debug, Clone, Copy)]
struct GroundMapping {
    centroid: DVec2,
    px_per_m: f64,
}

impl GroundMapping {
    fn to_ground(self, px: DVec2) -> DVec2 {
        let rel = (px - self.centroid) / self.px_per_m;
        DVec2::new(rel.x, -rel.y)
    }
}

/// Baut das Wandmodell aus dem Grundriss.
///
/// Geschlossener Umriss: Boden plus eine Wand je Umrisskante.
/// Sonst: eine Wand je Segment, ohne Boden.
pub fn build_wall_model(
    plan: &FloorPlan,
    px_per_m: f64,
    wall_height: f64,
    thickness: f64,
) -> WallModel {
    let Some(centroid) = plan.centroid() else {
        return WallModel::default();
    };
    if !(px_per_m.is_finite() && px_per_m > 0.0) {
        log::warn!("Ungültiger Maßstab {} – kein Wandmodell", px_per_m);
        return WallModel::default();
    }
    let mapping = GroundMapping { centroid, px_per_m };
    let ground = |index: usize| plan.point_pos(index).map(|p| mapping.to_ground(p));

    let mut model = WallModel::default();

    if let Some(polygon) = closed_polygon(&plan.segments) {
        let outline: Vec<DVec2> = polygon.iter().filter_map(|&i| ground(i)).collect();
        for (i, &a) in outline.iter().enumerate() {
            let b = outline[(i + 1) % outline.len()];
            if let Some(wall) = wall_between(a, b, wall_height, thickness) {
                model.walls.push(wall);
            }
        }
        model.floor = Some(FloorShape { outline });
    } else {
        for seg in &plan.segments {
            let (Some(a), Some(b)) = (ground(seg.a), ground(seg.b)) else {
                continue;
            };
            if let Some(wall) = wall_between(a, b, wall_height, thickness) {
                model.walls.push(wall);
            }
        }
    }

    log::debug!(
        "Wandmodell: {} Wände, Boden: {}",
        model.walls.len(),
        model.floor.is_some()
    );
    model
}

/// Wand zwischen zwei Bodenpunkten; `None` bei Länge unter [`MIN_WALL_LENGTH_M`].
fn wall_between(a: DVec2, b: DVec2, height: f64, thickness: f64) -> Option<WallBox> {
    let delta = b - a;
    let length = delta.length();
    if length < MIN_WALL_LENGTH_M {
        return None;
    }
    let mid = (a + b) * 0.5;
    Some(WallBox {
        center: DVec3::new(mid.x, height / 2.0, mid.y),
        size: DVec3::new(length, height, thickness),
        yaw: -delta.y.atan2(delta.x),
    })
}
