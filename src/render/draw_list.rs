//! Backend-neutrale Zeichenliste.
//!
//! Die Szene wird einmal in Primitive übersetzt; egui-Painter (Bildschirm)
//! und Raster-Backend (Export) zeichnen dieselbe Liste.

/// RGBA-Farbe mit Komponenten in 0..=1.
pub type Rgba = [f32; 4];

/// Ein Zeichenbefehl in Ausgabe-Pixeln (Ursprung oben links).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// Gefülltes Rechteck
    Rect {
        /// Linke obere Ecke
        min: [f32; 2],
        /// Breite und Höhe
        size: [f32; 2],
        /// Füllfarbe
        fill: Rgba,
    },
    /// Rechteckrahmen
    RectOutline {
        /// Linke obere Ecke
        min: [f32; 2],
        /// Breite und Höhe
        size: [f32; 2],
        /// Linienstärke
        width: f32,
        /// Linienfarbe
        color: Rgba,
    },
    /// Durchgezogene Linie
    Line {
        /// Start
        from: [f32; 2],
        /// Ende
        to: [f32; 2],
        /// Linienstärke
        width: f32,
        /// Farbe
        color: Rgba,
    },
    /// Gestrichelte Linie
    DashedLine {
        /// Start
        from: [f32; 2],
        /// Ende
        to: [f32; 2],
        /// Linienstärke
        width: f32,
        /// Strichlänge
        dash: f32,
        /// Lückenlänge
        gap: f32,
        /// Farbe
        color: Rgba,
    },
    /// Gefüllter Kreis
    Circle {
        /// Mittelpunkt
        center: [f32; 2],
        /// Radius
        radius: f32,
        /// Farbe
        color: Rgba,
    },
    /// Textzeile
    Label {
        /// Linke obere Ecke der Zeile
        pos: [f32; 2],
        /// Text
        text: String,
        /// Schrifthöhe in Pixeln
        size: f32,
        /// Farbe
        color: Rgba,
    },
}

/// Textbreite je Backend (Bildschirmschrift und Bitmap-Font laufen unterschiedlich breit).
pub trait TextMeasure {
    /// Breite von `text` bei Schrifthöhe `size` in Pixeln.
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// Wandelt eine RGBA-Farbe in 8-Bit-RGB plus Alpha.
pub fn to_rgb8(color: Rgba) -> ([u8; 3], f32) {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    (
        [channel(color[0]), channel(color[1]), channel(color[2])],
        color[3].clamp(0.0, 1.0),
    )
}
