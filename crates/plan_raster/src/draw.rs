//! Zeichenprimitive auf `RgbImage`: Linien, Kreise, Rechtecke.
//!
//! Alle Koordinaten sind Bildpixel (f32, Ursprung oben links). Pixel außerhalb
//! des Bildes werden stillschweigend verworfen.

use image::{Rgb, RgbImage};

/// Mischt `color` mit Deckkraft `alpha` (0..=1) in einen einzelnen Pixel.
pub fn blend_pixel(image: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, alpha: f32) {
    if x < 0 || y < 0 || x >= image.width() as i32 || y >= image.height() as i32 {
        return;
    }
    let alpha = alpha.clamp(0.0, 1.0);
    let pixel = image.get_pixel_mut(x as u32, y as u32);
    if alpha >= 1.0 {
        *pixel = color;
        return;
    }
    for channel in 0..3 {
        pixel[channel] = blend_channel(pixel[channel], color[channel], alpha);
    }
}

fn blend_channel(base: u8, overlay: u8, alpha: f32) -> u8 {
    let result = base as f32 * (1.0 - alpha) + overlay as f32 * alpha;
    result.round().clamp(0.0, 255.0) as u8
}

/// Zeichnet eine Linie der Breite `width` (Pixel) zwischen `from` und `to`.
///
/// Jeder Pixel, dessen Mittelpunkt höchstens `width / 2` vom Segment entfernt
/// liegt, wird eingefärbt. Die Mindestbreite ist 1 Pixel.
pub fn draw_line(
    image: &mut RgbImage,
    from: [f32; 2],
    to: [f32; 2],
    width: f32,
    color: Rgb<u8>,
    alpha: f32,
) {
    let half = (width * 0.5).max(0.5);
    let min_x = (from[0].min(to[0]) - half).floor() as i32;
    let max_x = (from[0].max(to[0]) + half).ceil() as i32;
    let min_y = (from[1].min(to[1]) - half).floor() as i32;
    let max_y = (from[1].max(to[1]) + half).ceil() as i32;

    let min_x = min_x.max(0);
    let min_y = min_y.max(0);
    let max_x = max_x.min(image.width() as i32 - 1);
    let max_y = max_y.min(image.height() as i32 - 1);

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let center = [px as f32 + 0.5, py as f32 + 0.5];
            if distance_to_segment(center, from, to) <= half {
                blend_pixel(image, px, py, color, alpha);
            }
        }
    }
}

/// Zeichnet eine gestrichelte Linie (`dash` Pixel Strich, `gap` Pixel Lücke).
pub fn draw_dashed_line(
    image: &mut RgbImage,
    from: [f32; 2],
    to: [f32; 2],
    width: f32,
    dash: f32,
    gap: f32,
    color: Rgb<u8>,
) {
    let dx = to[0] - from[0];
    let dy = to[1] - from[1];
    let length = (dx * dx + dy * dy).sqrt();
    if length <= f32::EPSILON || dash <= 0.0 {
        return;
    }
    let (ux, uy) = (dx / length, dy / length);
    let period = dash + gap.max(0.0);

    let mut start = 0.0;
    while start < length {
        let end = (start + dash).min(length);
        draw_line(
            image,
            [from[0] + ux * start, from[1] + uy * start],
            [from[0] + ux * end, from[1] + uy * end],
            width,
            color,
            1.0,
        );
        start += period;
    }
}

/// Zeichnet einen gefüllten Kreis.
pub fn draw_filled_circle(image: &mut RgbImage, center: [f32; 2], radius: f32, color: Rgb<u8>) {
    let r = radius.max(0.5);
    let min_x = (center[0] - r).floor() as i32;
    let max_x = (center[0] + r).ceil() as i32;
    let min_y = (center[1] - r).floor() as i32;
    let max_y = (center[1] + r).ceil() as i32;

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let dx = px as f32 + 0.5 - center[0];
            let dy = py as f32 + 0.5 - center[1];
            if dx * dx + dy * dy <= r * r {
                blend_pixel(image, px, py, color, 1.0);
            }
        }
    }
}

/// Zeichnet ein gefülltes Rechteck mit Alpha-Blending.
pub fn draw_rect_blended(
    image: &mut RgbImage,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    color: Rgb<u8>,
    alpha: f32,
) {
    for dy in 0..h as i32 {
        for dx in 0..w as i32 {
            blend_pixel(image, x + dx, y + dy, color, alpha);
        }
    }
}

/// Zeichnet den Rahmen eines Rechtecks (Linienstärke `thickness` nach innen).
#[allow(clippy::too_many_arguments)]
pub fn draw_rect_outline(
    image: &mut RgbImage,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    thickness: u32,
    color: Rgb<u8>,
    alpha: f32,
) {
    let t = thickness.max(1).min(w.min(h).max(1));
    draw_rect_blended(image, x, y, w, t, color, alpha);
    draw_rect_blended(image, x, y + h as i32 - t as i32, w, t, color, alpha);
    let inner_h = h.saturating_sub(2 * t);
    draw_rect_blended(image, x, y + t as i32, t, inner_h, color, alpha);
    draw_rect_blended(image, x + w as i32 - t as i32, y + t as i32, t, inner_h, color, alpha);
}

fn distance_to_segment(p: [f32; 2], a: [f32; 2], b: [f32; 2]) -> f32 {
    let abx = b[0] - a[0];
    let aby = b[1] - a[1];
    let ab2 = abx * abx + aby * aby;
    if ab2 <= 1e-9 {
        return ((p[0] - a[0]).powi(2) + (p[1] - a[1]).powi(2)).sqrt();
    }
    let t = (((p[0] - a[0]) * abx + (p[1] - a[1]) * aby) / ab2).clamp(0.0, 1.0);
    let cx = a[0] + t * abx;
    let cy = a[1] + t * aby;
    ((p[0] - cx).powi(2) + (p[1] - cy).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn horizontal_line_covers_its_row() {
        let mut img = RgbImage::from_pixel(20, 10, WHITE);
        draw_line(&mut img, [2.0, 5.0], [18.0, 5.0], 2.0, BLACK, 1.0);
        assert_eq!(*img.get_pixel(10, 5), BLACK);
        assert_eq!(*img.get_pixel(10, 1), WHITE);
    }

    #[test]
    fn blending_mixes_with_background() {
        let mut img = RgbImage::from_pixel(1, 1, WHITE);
        blend_pixel(&mut img, 0, 0, BLACK, 0.5);
        assert_eq!(img.get_pixel(0, 0)[0], 128);
    }

    #[test]
    fn dashed_line_leaves_gaps() {
        let mut img = RgbImage::from_pixel(40, 5, WHITE);
        draw_dashed_line(&mut img, [0.0, 2.5], [40.0, 2.5], 1.0, 6.0, 4.0, BLACK);
        assert_eq!(*img.get_pixel(2, 2), BLACK);
        assert_eq!(*img.get_pixel(8, 2), WHITE);
    }

    #[test]
    fn circle_outside_image_does_not_panic() {
        let mut img = RgbImage::from_pixel(4, 4, WHITE);
        draw_filled_circle(&mut img, [-10.0, -10.0], 3.0, BLACK);
        draw_rect_outline(&mut img, -2, -2, 10, 10, 1, BLACK, 1.0);
        assert_eq!(*img.get_pixel(1, 1), WHITE);
    }
}
