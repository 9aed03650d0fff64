//! Geometriemodell des Grundrisses: Punkte und Segmente in Canvas-Pixeln.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ein Punkt des Grundrisses in Canvas-Pixeln (y wächst nach unten).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanPoint {
    /// X-Koordinate in Pixeln
    pub x: f64,
    /// Y-Koordinate in Pixeln
    pub y: f64,
}

impl PlanPoint {
    /// Erstellt einen Punkt aus Koordinaten.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position als Vektor.
    pub fn pos(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for PlanPoint {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Verbindung zweier Punkte, optional mit gemessener Länge in Metern.
///
/// Ist `len_m` gesetzt, hat dieser Wert Vorrang vor der Pixel-Länge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Index des Startpunkts
    pub a: usize,
    /// Index des Endpunkts
    pub b: usize,
    /// Gemessene Länge in Metern (falls vorhanden)
    #[serde(default)]
    pub len_m: Option<f64>,
}

impl Segment {
    /// Erstellt ein Segment ohne gemessene Länge.
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b, len_m: None }
    }

    /// Erstellt ein Segment mit gemessener Länge.
    pub fn measured(a: usize, b: usize, len_m: f64) -> Self {
        Self {
            a,
            b,
            len_m: Some(len_m),
        }
    }

    /// Prüft, ob das Segment den Punkt `index` verwendet.
    pub fn touches(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }
}

/// Punktliste plus Segmentliste, die Punkte per Index referenziert.
///
/// Invariante: jedes Segment hat `a != b`, beide Indizes sind gültig.
/// Alle Mutatoren erhalten diese Invariante; ungültige Aufrufe sind No-ops.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Punkte in Einfügereihenfolge
    #[serde(default)]
    pub points: Vec<PlanPoint>,
    /// Segmente (Indizes in `points`)
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl FloorPlan {
    /// Erstellt einen leeren Grundriss.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Punkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der Segmente.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Gibt `true` zurück, wenn weder Punkte noch Segmente existieren.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.segments.is_empty()
    }

    /// Position des Punkts `index`, falls vorhanden.
    pub fn point_pos(&self, index: usize) -> Option<DVec2> {
        self.points.get(index).map(PlanPoint::pos)
    }

    /// Hängt einen Punkt an und gibt seinen Index zurück.
    pub fn add_point(&mut self, pos: DVec2) -> usize {
        self.points.push(PlanPoint::from(pos));
        self.points.len() - 1
    }

    /// Verschiebt einen Punkt. Gibt `false` zurück, wenn der Index ungültig ist.
    pub fn move_point(&mut self, index: usize, pos: DVec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                *point = PlanPoint::from(pos);
                true
            }
            None => false,
        }
    }

    /// Entfernt einen Punkt samt aller anliegenden Segmente.
    ///
    /// Alle Segment-Indizes größer `index` werden um eins verringert.
    pub fn remove_point(&mut self, index: usize) -> Option<PlanPoint> {
        if index >= self.points.len() {
            return None;
        }
        let removed = self.points.remove(index);
        self.segments.retain(|seg| !seg.touches(index));
        for seg in &mut self.segments {
            if seg.a > index {
                seg.a -= 1;
            }
            if seg.b > index {
                seg.b -= 1;
            }
        }
        Some(removed)
    }

    /// Fügt ein Segment hinzu und gibt dessen Index zurück.
    ///
    /// `None`, wenn ein Index ungültig ist oder `a == b`.
    pub fn add_segment(&mut self, a: usize, b: usize, len_m: Option<f64>) -> Option<usize> {
        if a == b || a >= self.points.len() || b >= self.points.len() {
            log::warn!("Ungültiges Segment {} -> {} verworfen", a, b);
            return None;
        }
        self.segments.push(Segment { a, b, len_m });
        Some(self.segments.len() - 1)
    }

    /// Entfernt ein Segment anhand seines Index.
    pub fn remove_segment(&mut self, index: usize) -> Option<Segment> {
        if index >= self.segments.len() {
            return None;
        }
        Some(self.segments.remove(index))
    }

    /// Endpunkte eines Segments als Vektoren.
    pub fn segment_endpoints(&self, seg: &Segment) -> Option<(DVec2, DVec2)> {
        Some((self.point_pos(seg.a)?, self.point_pos(seg.b)?))
    }

    /// Länge eines Segments in Metern.
    ///
    /// Gemessene Länge hat Vorrang, sonst Pixel-Länge / `px_per_m`.
    pub fn segment_length_m(&self, index: usize, px_per_m: f64) -> Option<f64> {
        let seg = self.segments.get(index)?;
        if let Some(len) = seg.len_m {
            return Some(len);
        }
        let (a, b) = self.segment_endpoints(seg)?;
        Some(a.distance(b) / px_per_m)
    }

    /// Schwerpunkt aller Punkte (arithmetisches Mittel).
    pub fn centroid(&self) -> Option<DVec2> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self
            .points
            .iter()
            .fold(DVec2::ZERO, |acc, point| acc + point.pos());
        Some(sum / self.points.len() as f64)
    }

    /// Nächster Punkt innerhalb `tolerance`, optional ohne `exclude`.
    ///
    /// Bei gleichem Abstand gewinnt der kleinere Index.
    pub fn nearest_point_within(
        &self,
        pos: DVec2,
        tolerance: f64,
        exclude: Option<usize>,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, point) in self.points.iter().enumerate() {
            if Some(index) == exclude {
                continue;
            }
            let dist = point.pos().distance(pos);
            if dist > tolerance {
                continue;
            }
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((index, dist));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Punkt unter dem Cursor (Hit-Test mit Toleranz).
    pub fn find_point_at(&self, pos: DVec2, tolerance: f64) -> Option<usize> {
        self.nearest_point_within(pos, tolerance, None)
    }

    /// Segment unter dem Cursor: kleinster Abstand zum Liniensegment, höchstens `tolerance`.
    pub fn find_segment_at(&self, pos: DVec2, tolerance: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, seg) in self.segments.iter().enumerate() {
            let Some((a, b)) = self.segment_endpoints(seg) else {
                continue;
            };
            let dist = point_to_segment_distance(pos, a, b);
            if dist > tolerance {
                continue;
            }
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((index, dist));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Entfernt Segmente mit ungültigen Indizes oder `a == b`.
    /// Gibt die Anzahl der verworfenen Segmente zurück.
    pub fn drop_invalid_segments(&mut self) -> usize {
        let point_count = self.points.len();
        let before = self.segments.len();
        self.segments
            .retain(|seg| seg.a != seg.b && seg.a < point_count && seg.b < point_count);
        before - self.segments.len()
    }
}

/// Abstand eines Punkts zum Liniensegment `a`–`b` (Projektion auf [0, 1] geklemmt).
pub fn point_to_segment_distance(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests;
