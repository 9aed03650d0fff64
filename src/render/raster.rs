//! Raster-Backend: zeichnet eine Zeichenliste per `plan_raster` in ein Bild.

use super::draw_list::{to_rgb8, DrawPrimitive, TextMeasure};
use plan_raster::{draw, text, Rgb, RgbImage};

/// Höhe einer Bitmap-Glyphe bei Skalierung 1.
const GLYPH_HEIGHT: f32 = 7.0;

/// Textmaße des eingebetteten 5×7-Fonts.
pub struct BitmapTextMeasure;

impl TextMeasure for BitmapTextMeasure {
    fn text_width(&self, content: &str, size: f32) -> f32 {
        text::text_width(content, glyph_scale(size)) as f32
    }
}

/// Ganzzahlige Font-Skalierung für eine Schrifthöhe (mindestens 1).
pub fn glyph_scale(size: f32) -> u32 {
    (size / GLYPH_HEIGHT).round().max(1.0) as u32
}

/// Rastert eine Zeichenliste in ein weißes Bild der Größe `width` × `height`.
pub fn rasterize(list: &[DrawPrimitive], width: u32, height: u32) -> RgbImage {
    let mut image = RgbImage::from_pixel(width.max(1), height.max(1), Rgb([255, 255, 255]));
    for primitive in list {
        draw_primitive(&mut image, primitive);
    }
    image
}

fn draw_primitive(image: &mut RgbImage, primitive: &DrawPrimitive) {
    match primitive {
        DrawPrimitive::Rect { min, size, fill } => {
            let (rgb, alpha) = to_rgb8(*fill);
            draw::draw_rect_blended(
                image,
                min[0].round() as i32,
                min[1].round() as i32,
                size[0].round().max(0.0) as u32,
                size[1].round().max(0.0) as u32,
                Rgb(rgb),
                alpha,
            );
        }
        DrawPrimitive::RectOutline {
            min,
            size,
            width,
            color,
        } => {
            let (rgb, alpha) = to_rgb8(*color);
            draw::draw_rect_outline(
                image,
                min[0].round() as i32,
                min[1].round() as i32,
                size[0].round().max(0.0) as u32,
                size[1].round().max(0.0) as u32,
                width.round().max(1.0) as u32,
                Rgb(rgb),
                alpha,
            );
        }
        DrawPrimitive::Line {
            from,
            to,
            width,
            color,
        } => {
            let (rgb, alpha) = to_rgb8(*color);
            draw::draw_line(image, *from, *to, *width, Rgb(rgb), alpha);
        }
        DrawPrimitive::DashedLine {
            from,
            to,
            width,
            dash,
            gap,
            color,
        } => {
            let (rgb, _) = to_rgb8(*color);
            draw::draw_dashed_line(image, *from, *to, *width, *dash, *gap, Rgb(rgb));
        }
        DrawPrimitive::Circle {
            center,
            radius,
            color,
        } => {
            let (rgb, _) = to_rgb8(*color);
            draw::draw_filled_circle(image, *center, *radius, Rgb(rgb));
        }
        DrawPrimitive::Label {
            pos,
            text: content,
            size,
            color,
        } => {
            let (rgb, _) = to_rgb8(*color);
            text::draw_text(
                image,
                pos[0].round() as i32,
                pos[1].round() as i32,
                content,
                Rgb(rgb),
                glyph_scale(*size),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_scale_follows_font_size() {
        assert_eq!(glyph_scale(12.0), 2);
        assert_eq!(glyph_scale(48.0), 7);
        assert_eq!(glyph_scale(2.0), 1);
    }

    #[test]
    fn rect_and_line_are_painted() {
        let list = vec![
            DrawPrimitive::Rect {
                min: [0.0, 0.0],
                size: [20.0, 20.0],
                fill: [0.0, 0.0, 1.0, 1.0],
            },
            DrawPrimitive::Line {
                from: [0.0, 10.5],
                to: [20.0, 10.5],
                width: 1.0,
                color: [1.0, 0.0, 0.0, 1.0],
            },
        ];
        let image = rasterize(&list, 20, 20);
        assert_eq!(image.get_pixel(2, 2), &Rgb([0, 0, 255]));
        assert_eq!(image.get_pixel(5, 10), &Rgb([255, 0, 0]));
    }
}
