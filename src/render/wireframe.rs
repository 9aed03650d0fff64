//! Drahtgitter-Projektion des Wandmodells für die 3D-Vorschau und deren Export.

use super::draw_list::{DrawPrimitive, Rgba};
use crate::core::camera3d::project_with;
use crate::core::{Camera3D, WallModel};
use glam::{DVec2, DVec3};

const BACKGROUND: Rgba = [0.96, 0.96, 0.97, 1.0];
const WALL_COLOR: Rgba = [0.25, 0.28, 0.32, 1.0];
const FLOOR_COLOR: Rgba = [0.72, 0.55, 0.35, 1.0];
const GROUND_COLOR: Rgba = [0.85, 0.85, 0.87, 1.0];
const LINE_WIDTH: f32 = 1.5;
/// Halbe Kantenlänge des Bodenrasters in Metern.
const GROUND_EXTENT_M: i32 = 10;

/// Kanten eines Quaders als Eckindex-Paare (siehe `WallBox::corners`).
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Zeichenliste der 3D-Ansicht für einen Viewport in Pixeln.
pub fn build_wireframe(model: &WallModel, camera: &Camera3D, viewport: [f32; 2]) -> Vec<DrawPrimitive> {
    let size = DVec2::new(f64::from(viewport[0].max(1.0)), f64::from(viewport[1].max(1.0)));
    let view_proj = camera.view_projection(size.x / size.y);
    let project = |p: DVec3| project_with(&view_proj, p, size).map(|v| [v.x as f32, v.y as f32]);

    let mut list = vec![DrawPrimitive::Rect {
        min: [0.0, 0.0],
        size: [size.x as f32, size.y as f32],
        fill: BACKGROUND,
    }];

    let push_edge = |list: &mut Vec<DrawPrimitive>, a: DVec3, b: DVec3, color: Rgba| {
        if let (Some(from), Some(to)) = (project(a), project(b)) {
            list.push(DrawPrimitive::Line {
                from,
                to,
                width: LINE_WIDTH,
                color,
            });
        }
    };

    for i in -GROUND_EXTENT_M..=GROUND_EXTENT_M {
        let f = f64::from(i);
        let e = f64::from(GROUND_EXTENT_M);
        push_edge(&mut list, DVec3::new(f, 0.0, -e), DVec3::new(f, 0.0, e), GROUND_COLOR);
        push_edge(&mut list, DVec3::new(-e, 0.0, f), DVec3::new(e, 0.0, f), GROUND_COLOR);
    }

    if let Some(floor) = &model.floor {
        let n = floor.outline.len();
        for i in 0..n {
            let a = floor.outline[i];
            let b = floor.outline[(i + 1) % n];
            push_edge(
                &mut list,
                DVec3::new(a.x, 0.0, a.y),
                DVec3::new(b.x, 0.0, b.y),
                FLOOR_COLOR,
            );
        }
    }

    for wall in &model.walls {
        let corners = wall.corners();
        for (a, b) in BOX_EDGES {
            push_edge(&mut list, corners[a], corners[b], WALL_COLOR);
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{build_wall_model, FloorPlan};

    fn count_lines(list: &[DrawPrimitive], color: Rgba) -> usize {
        list.iter()
            .filter(|p| matches!(p, DrawPrimitive::Line { color: c, .. } if *c == color))
            .count()
    }

    #[test]
    fn single_wall_draws_twelve_edges() {
        let mut plan = FloorPlan::new();
        plan.add_point(DVec2::new(0.0, 0.0));
        plan.add_point(DVec2::new(200.0, 0.0));
        plan.add_segment(0, 1, None);
        let model = build_wall_model(&plan, 200.0, 2.5, 0.05);

        let mut camera = Camera3D::default();
        if let Some(bounds) = model.bounds() {
            camera.frame_bounds(&bounds);
        }
        let list = build_wireframe(&model, &camera, [640.0, 480.0]);

        assert_eq!(count_lines(&list, WALL_COLOR), 12);
        assert_eq!(count_lines(&list, FLOOR_COLOR), 0);
    }

    #[test]
    fn empty_model_still_draws_background() {
        let list = build_wireframe(&WallModel::default(), &Camera3D::default(), [100.0, 100.0]);
        assert!(matches!(list[0], DrawPrimitive::Rect { .. }));
        assert_eq!(count_lines(&list, WALL_COLOR), 0);
    }
}
