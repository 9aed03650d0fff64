//! PNG/JPEG-Kodierung fertig gezeichneter Bilder.

use anyhow::{Context, Result};
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use std::io::Write;
use std::path::Path;

/// Zielformat eines Raster-Exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    /// Verlustfrei
    Png,
    /// JPEG mit Qualität 1..=100
    Jpeg { quality: u8 },
}

impl RasterFormat {
    /// Dateiendung ohne Punkt.
    pub fn extension(self) -> &'static str {
        match self {
            RasterFormat::Png => "png",
            RasterFormat::Jpeg { .. } => "jpg",
        }
    }
}

/// Kodiert das Bild in einen beliebigen Writer.
pub fn write_image<W: Write>(image: &RgbImage, format: RasterFormat, writer: W) -> Result<()> {
    let (w, h) = image.dimensions();
    match format {
        RasterFormat::Png => {
            let encoder = image::codecs::png::PngEncoder::new(writer);
            encoder
                .write_image(image.as_raw(), w, h, ExtendedColorType::Rgb8)
                .context("PNG-Kodierung fehlgeschlagen")?;
        }
        RasterFormat::Jpeg { quality } => {
            let encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(writer, quality.clamp(1, 100));
            encoder
                .write_image(image.as_raw(), w, h, ExtendedColorType::Rgb8)
                .context("JPEG-Kodierung fehlgeschlagen")?;
        }
    }
    Ok(())
}

/// Kodiert das Bild in einen Byte-Puffer.
pub fn encode(image: &RgbImage, format: RasterFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image(image, format, &mut buffer)?;
    Ok(buffer)
}

/// Schreibt das Bild als Datei.
pub fn save(image: &RgbImage, path: &Path, format: RasterFormat) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Datei nicht anlegbar: {}", path.display()))?;
    write_image(image, format, std::io::BufWriter::new(file))?;
    log::info!(
        "Bild gespeichert: {} ({}x{}, {})",
        path.display(),
        image.width(),
        image.height(),
        format.extension()
    );
    Ok(())
}
