//! `plan_raster` — CPU-Rasterisierung für den Grundriss-Export.
//!
//! Stellt einfache Zeichenprimitive auf `image::RgbImage` bereit
//! (Linien, gestrichelte Linien, Kreise, halbtransparente Rechtecke),
//! einen eingebetteten 5×7 Bitmap-Font und PNG/JPEG-Kodierung.
//!
//! # Beispiel
//! ```no_run
//! use plan_raster::{draw, encode, text, RasterFormat};
//! use image::{Rgb, RgbImage};
//!
//! let mut img = RgbImage::from_pixel(200, 100, Rgb([255, 255, 255]));
//! draw::draw_line(&mut img, [10.0, 50.0], [190.0, 50.0], 2.0, Rgb([0, 0, 0]), 1.0);
//! text::draw_text(&mut img, 80, 30, "1.800 m", Rgb([0, 0, 0]), 2);
//! encode::save(&img, std::path::Path::new("plan.png"), RasterFormat::Png)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod draw;
pub mod encode;
pub mod text;

pub use encode::RasterFormat;
pub use image::{Rgb, RgbImage};
