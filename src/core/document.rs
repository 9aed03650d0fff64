//! Dokumentformat: Grundriss + Maßstab + Titel als JSON.
//!
//! ```json
//! { "pxPerM": 200, "points": [{"x": 0, "y": 0}], "segments": [{"a": 0, "b": 1, "len_m": null}], "title": "" }
//! ```

use super::floor_plan::{FloorPlan, PlanPoint, Segment};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Vollständiges Dokument: Geometrie, Maßstab und Projekttitel.
///
/// Ein Undo-Snapshot umfasst genau diesen Zustand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDocument {
    /// Maßstab in Pixel pro Meter (> 0)
    #[serde(rename = "pxPerM")]
    pub px_per_m: f64,
    /// Punkte und Segmente
    #[serde(flatten)]
    pub plan: FloorPlan,
    /// Projekttitel (darf leer sein)
    pub title: String,
}

impl PlanDocument {
    /// Leeres Dokument mit gegebenem Maßstab.
    pub fn new(px_per_m: f64) -> Self {
        Self {
            px_per_m,
            plan: FloorPlan::new(),
            title: String::new(),
        }
    }

    /// Serialisiert das Dokument als eingerücktes JSON.
    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Dokument konnte nicht serialisiert werden")
    }

    /// Parst ein Dokument.
    ///
    /// Fehlende Felder werden ergänzt: `pxPerM` übernimmt `fallback_px_per_m`,
    /// Listen werden leer, der Titel wird `""`. Ungültige Segmente werden verworfen.
    pub fn parse(json: &str, fallback_px_per_m: f64) -> anyhow::Result<Self> {
        let file: DocumentFile =
            serde_json::from_str(json).context("Ungültiges Grundriss-JSON")?;

        let px_per_m = match file.px_per_m {
            Some(value) if value.is_finite() && value > 0.0 => value,
            Some(value) => {
                log::warn!(
                    "Ungültiger Maßstab {} in Datei, behalte {} px/m",
                    value,
                    fallback_px_per_m
                );
                fallback_px_per_m
            }
            None => fallback_px_per_m,
        };

        let mut plan = FloorPlan {
            points: file.points,
            segments: file.segments,
        };
        let dropped = plan.drop_invalid_segments();
        if dropped > 0 {
            log::warn!("{} ungültige Segmente beim Laden verworfen", dropped);
        }

        Ok(Self {
            px_per_m,
            plan,
            title: file.title.unwrap_or_default(),
        })
    }

    /// Dateiname-Stamm aus dem Titel: Leerraum wird zu `_`, leerer Titel ergibt `fallback`.
    pub fn file_stem(&self, fallback: &str) -> String {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            return fallback.to_string();
        }
        trimmed.split_whitespace().collect::<Vec<_>>().join("_")
    }
}

/// Tolerante Lese-Sicht auf das Dateiformat.
#[derive(Deserialize)]
struct DocumentFile {
    #[serde(rename = "pxPerM", default)]
    px_per_m: Option<f64>,
    #[serde(default)]
    points: Vec<PlanPoint>,
    #[serde(default)]
    segments: Vec<Segment>,
    #[serde(default)]
    title: Option<String>,
}
