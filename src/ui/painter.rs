//! egui-Backend der Zeichenliste.

use crate::render::draw_list::{to_rgb8, DrawPrimitive, Rgba, TextMeasure};

/// Textmaße der Bildschirmschrift.
pub struct EguiTextMeasure<'a> {
    painter: &'a egui::Painter,
}

impl<'a> EguiTextMeasure<'a> {
    /// Misst mit den Fonts des übergebenen Painters.
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl TextMeasure for EguiTextMeasure<'_> {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        self.painter
            .layout_no_wrap(
                text.to_owned(),
                egui::FontId::proportional(size),
                egui::Color32::BLACK,
            )
            .size()
            .x
    }
}

/// Wandelt eine Listenfarbe in `Color32`.
pub fn to_color32(color: Rgba) -> egui::Color32 {
    let ([r, g, b], alpha) = to_rgb8(color);
    egui::Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0).round() as u8)
}

/// Zeichnet eine Zeichenliste mit Ursprung `origin` (linke obere Ecke der Fläche).
pub fn paint_draw_list(painter: &egui::Painter, origin: egui::Pos2, list: &[DrawPrimitive]) {
    let at = |p: [f32; 2]| origin + egui::vec2(p[0], p[1]);

    for primitive in list {
        match primitive {
            DrawPrimitive::Rect { min, size, fill } => {
                let rect = egui::Rect::from_min_size(at(*min), egui::vec2(size[0], size[1]));
                painter.rect_filled(rect, 0.0, to_color32(*fill));
            }
            DrawPrimitive::RectOutline {
                min,
                size,
                width,
                color,
            } => {
                let rect = egui::Rect::from_min_size(at(*min), egui::vec2(size[0], size[1]));
                painter.rect_stroke(
                    rect,
                    0.0,
                    egui::Stroke::new(*width, to_color32(*color)),
                    egui::StrokeKind::Inside,
                );
            }
            DrawPrimitive::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment(
                    [at(*from), at(*to)],
                    egui::Stroke::new(*width, to_color32(*color)),
                );
            }
            DrawPrimitive::DashedLine {
                from,
                to,
                width,
                dash,
                gap,
                color,
            } => {
                painter.extend(egui::Shape::dashed_line(
                    &[at(*from), at(*to)],
                    egui::Stroke::new(*width, to_color32(*color)),
                    *dash,
                    *gap,
                ));
            }
            DrawPrimitive::Circle {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(at(*center), *radius, to_color32(*color));
            }
            DrawPrimitive::Label {
                pos,
                text,
                size,
                color,
            } => {
                painter.text(
                    at(*pos),
                    egui::Align2::LEFT_TOP,
                    text,
                    egui::FontId::proportional(*size),
                    to_color32(*color),
                );
            }
        }
    }
}
