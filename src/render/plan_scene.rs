//! 2D-Plan als Zeichenliste: Hintergrund, Raster, Segmente mit Längen,
//! Punkte, Platzier-Vorschau und Kartusche (unten links).
//!
//! Alle Maße sind Canvas-Pixel und werden mit `scene.scale` multipliziert.

use super::draw_list::{DrawPrimitive, Rgba, TextMeasure};
use crate::shared::RenderScene;
use glam::DVec2;

const BACKGROUND: Rgba = [1.0, 1.0, 1.0, 1.0];
const SEGMENT_WIDTH: f32 = 2.0;
const POINT_RADIUS: f32 = 4.0;
const LABEL_SIZE: f32 = 12.0;
/// Versatz der Längenbeschriftung relativ zur Segmentmitte.
const LABEL_OFFSET: [f32; 2] = [6.0, -6.0];
/// Hinterlegung der Längenbeschriftung.
const LABEL_FILL: Rgba = [1.0, 1.0, 1.0, 0.88];
const LABEL_PADDING: f32 = 2.0;
const PREVIEW_WIDTH: f32 = 1.5;
const PREVIEW_DASH: f32 = 6.0;
const PREVIEW_GAP: f32 = 4.0;

// ── Kartusche ───────────────────────────────────────────────────────

const CARTOUCHE_MARGIN: f32 = 12.0;
const CARTOUCHE_PADDING: f32 = 8.0;
const CARTOUCHE_LINE_HEIGHT: f32 = 16.0;
const CARTOUCHE_FILL: Rgba = [1.0, 1.0, 1.0, 0.9];
const CARTOUCHE_BORDER: Rgba = [0.2, 0.2, 0.2, 1.0];
const UNTITLED: &str = "(ohne Titel)";

/// Beschriftung einer Segmentlänge.
pub fn length_label(length_m: f64) -> String {
    format!("{:.3} m", length_m)
}

/// Zeilen der Kartusche: Titel, Datum, Maßstab.
pub fn cartouche_lines(scene: &RenderScene) -> [String; 3] {
    let title = scene.document.title.trim();
    [
        format!("Projekt: {}", if title.is_empty() { UNTITLED } else { title }),
        format!("Datum: {}", scene.cartouche_date),
        format!("Skala: {:.0} px/m", scene.document.px_per_m),
    ]
}

/// Übersetzt die Szene in eine Zeichenliste.
pub fn build_plan_draw_list(scene: &RenderScene, measure: &dyn TextMeasure) -> Vec<DrawPrimitive> {
    let s = scene.scale;
    let [width, height] = scene.output_size().map(|v| v as f32);
    let px = |p: DVec2| [p.x as f32 * s, p.y as f32 * s];
    let opts = &scene.options;
    let plan = &scene.document.plan;

    let mut list = vec![DrawPrimitive::Rect {
        min: [0.0, 0.0],
        size: [width, height],
        fill: BACKGROUND,
    }];

    if scene.show_grid {
        push_grid(&mut list, opts.grid_step_px as f32 * s, width, height, s, opts.grid_color);
    }

    for (index, seg) in plan.segments.iter().enumerate() {
        // Verwaiste Indizes werden übersprungen.
        let Some((a, b)) = plan.segment_endpoints(seg) else {
            continue;
        };
        list.push(DrawPrimitive::Line {
            from: px(a),
            to: px(b),
            width: SEGMENT_WIDTH * s,
            color: opts.segment_color,
        });
        if let Some(length) = plan.segment_length_m(index, scene.document.px_per_m) {
            let mid = px((a + b) * 0.5);
            let text = length_label(length);
            let size = LABEL_SIZE * s;
            let pos = [
                mid[0] + LABEL_OFFSET[0] * s,
                mid[1] + LABEL_OFFSET[1] * s - size,
            ];
            let pad = LABEL_PADDING * s;
            list.push(DrawPrimitive::Rect {
                min: [pos[0] - pad, pos[1] - pad],
                size: [measure.text_width(&text, size) + 2.0 * pad, size + 2.0 * pad],
                fill: LABEL_FILL,
            });
            list.push(DrawPrimitive::Label {
                pos,
                text,
                size,
                color: opts.label_color,
            });
        }
    }

    for point in &plan.points {
        list.push(DrawPrimitive::Circle {
            center: px(point.pos()),
            radius: POINT_RADIUS * s,
            color: opts.point_color,
        });
    }

    if let Some(preview) = &scene.preview {
        let to = px(preview.to);
        list.push(DrawPrimitive::DashedLine {
            from: px(preview.from),
            to,
            width: PREVIEW_WIDTH * s,
            dash: PREVIEW_DASH * s,
            gap: PREVIEW_GAP * s,
            color: opts.preview_color,
        });
        list.push(DrawPrimitive::Label {
            pos: [to[0] + 8.0 * s, to[1] - 8.0 * s - LABEL_SIZE * s],
            text: format!("preview: {:.3} m", preview.length_m),
            size: LABEL_SIZE * s,
            color: opts.preview_color,
        });
    }

    push_cartouche(&mut list, scene, measure, height);
    list
}

fn push_grid(list: &mut Vec<DrawPrimitive>, step: f32, width: f32, height: f32, s: f32, color: Rgba) {
    if step < 1.0 {
        return;
    }
    let mut x = 0.0;
    while x <= width {
        list.push(DrawPrimitive::Line {
            from: [x, 0.0],
            to: [x, height],
            width: s,
            color,
        });
        x += step;
    }
    let mut y = 0.0;
    while y <= height {
        list.push(DrawPrimitive::Line {
            from: [0.0, y],
            to: [width, y],
            width: s,
            color,
        });
        y += step;
    }
}

fn push_cartouche(
    list: &mut Vec<DrawPrimitive>,
    scene: &RenderScene,
    measure: &dyn TextMeasure,
    height: f32,
) {
    let s = scene.scale;
    let lines = cartouche_lines(scene);
    let text_size = LABEL_SIZE * s;
    let padding = CARTOUCHE_PADDING * s;
    let line_height = CARTOUCHE_LINE_HEIGHT * s;

    let text_width = lines
        .iter()
        .map(|line| measure.text_width(line, text_size))
        .fold(0.0_f32, f32::max);
    let box_size = [
        text_width + 2.0 * padding,
        line_height * lines.len() as f32 + 2.0 * padding - (line_height - text_size),
    ];
    let min = [
        CARTOUCHE_MARGIN * s,
        height - box_size[1] - CARTOUCHE_MARGIN * s,
    ];

    list.push(DrawPrimitive::Rect {
        min,
        size: box_size,
        fill: CARTOUCHE_FILL,
    });
    list.push(DrawPrimitive::RectOutline {
        min,
        size: box_size,
        width: s,
        color: CARTOUCHE_BORDER,
    });
    for (i, line) in lines.into_iter().enumerate() {
        list.push(DrawPrimitive::Label {
            pos: [min[0] + padding, min[1] + padding + i as f32 * line_height],
            text: line,
            size: text_size,
            color: scene.options.label_color,
        });
    }
}
