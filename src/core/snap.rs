//! Snap-Engine: rohe Cursor-Position → effektive Position.
//!
//! Reihenfolge: bestehender Punkt im Einrastradius, sonst Raster.
//! Der Ortho-Zwang wird vorher auf die Rohposition angewendet.

use super::FloorPlan;
use glam::DVec2;

/// Parameter für `resolve`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapSettings {
    /// Snapping aktiv
    pub enabled: bool,
    /// Einrastradius für bestehende Punkte
    pub point_radius: f64,
    /// Rasterabstand
    pub grid_step: f64,
}

/// Ergebnis eines Snap-Vorgangs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// Effektive Position
    pub position: DVec2,
    /// Index des Punkts, auf den eingerastet wurde
    pub snapped_point: Option<usize>,
}

impl SnapResult {
    fn free(position: DVec2) -> Self {
        Self {
            position,
            snapped_point: None,
        }
    }
}

/// Rundet jede Achse auf das nächste Vielfache von `step`.
pub fn snap_to_grid(pos: DVec2, step: f64) -> DVec2 {
    if step <= 0.0 {
        return pos;
    }
    (pos / step).round() * step
}

/// Nächster bestehender Punkt innerhalb `radius` (ohne `exclude`).
pub fn snap_to_existing_point(
    plan: &FloorPlan,
    pos: DVec2,
    radius: f64,
    exclude: Option<usize>,
) -> Option<(usize, DVec2)> {
    let index = plan.nearest_point_within(pos, radius, exclude)?;
    Some((index, plan.point_pos(index)?))
}

/// Ortho-Zwang relativ zu `anchor`: die kleinere Achsendifferenz wird auf null gesetzt.
pub fn constrain_orthogonal(anchor: DVec2, raw: DVec2) -> DVec2 {
    let delta = raw - anchor;
    if delta.x.abs() > delta.y.abs() {
        DVec2::new(raw.x, anchor.y)
    } else {
        DVec2::new(anchor.x, raw.y)
    }
}

/// Löst die effektive Position auf. Deaktiviertes Snapping gibt `raw` unverändert zurück.
pub fn resolve(plan: &FloorPlan, raw: DVec2, settings: &SnapSettings) -> SnapResult {
    resolve_excluding(plan, raw, settings, None)
}

/// Wie [`resolve`], ignoriert aber den Punkt `exclude` (z.B. den gezogenen Punkt).
pub fn resolve_excluding(
    plan: &FloorPlan,
    raw: DVec2,
    settings: &SnapSettings,
    exclude: Option<usize>,
) -> SnapResult {
    if !settings.enabled {
        return SnapResult::free(raw);
    }
    if let Some((index, pos)) = snap_to_existing_point(plan, raw, settings.point_radius, exclude) {
        return SnapResult {
            position: pos,
            snapped_point: Some(index),
        };
    }
    SnapResult::free(snap_to_grid(raw, settings.grid_step))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(enabled: bool) -> SnapSettings {
        SnapSettings {
            enabled,
            point_radius: 10.0,
            grid_step: 25.0,
        }
    }

    #[test]
    fn existing_point_beats_grid() {
        let mut plan = FloorPlan::new();
        plan.add_point(DVec2::new(100.0, 100.0));

        let result = resolve(&plan, DVec2::new(105.0, 104.0), &settings(true));
        assert_eq!(result.position, DVec2::new(100.0, 100.0));
        assert_eq!(result.snapped_point, Some(0));
    }

    #[test]
    fn falls_back_to_grid() {
        let plan = FloorPlan::new();
        let result = resolve(&plan, DVec2::new(37.0, 61.0), &settings(true));
        assert_eq!(result.position, DVec2::new(25.0, 50.0));
        assert_eq!(result.snapped_point, None);
    }

    #[test]
    fn disabled_returns_raw() {
        let mut plan = FloorPlan::new();
        plan.add_point(DVec2::new(100.0, 100.0));
        let raw = DVec2::new(103.0, 99.0);
        assert_eq!(resolve(&plan, raw, &settings(false)).position, raw);
    }

    #[test]
    fn excluded_point_is_ignored() {
        let mut plan = FloorPlan::new();
        plan.add_point(DVec2::new(100.0, 100.0));
        let result = resolve_excluding(&plan, DVec2::new(104.0, 104.0), &settings(true), Some(0));
        assert_eq!(result.position, DVec2::new(100.0, 100.0));
        assert_eq!(result.snapped_point, None);
    }

    #[test]
    fn ortho_keeps_dominant_axis() {
        let anchor = DVec2::new(100.0, 100.0);
        assert_eq!(
            constrain_orthogonal(anchor, DVec2::new(180.0, 120.0)),
            DVec2::new(180.0, 100.0)
        );
        assert_eq!(
            constrain_orthogonal(anchor, DVec2::new(110.0, 40.0)),
            DVec2::new(100.0, 40.0)
        );
    }
}
