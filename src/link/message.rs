//! Nachrichten der Mess-Bridge (ein JSON-Objekt pro WebSocket-Text-Frame).
//!
//! ```text
//! {"type":"measure","value_m":2.345,"ts":1700000000}
//! {"type":"ble_status","connected":true,"device_name":"GLM 50C","device_address":"AA:BB"}
//! ```

use serde::Deserialize;

/// Eingehende Nachricht der Mess-Bridge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LinkMessage {
    /// Neuer Messwert in Metern
    Measure {
        /// Gemessene Distanz
        value_m: f64,
        /// Zeitstempel der Bridge (optional)
        #[serde(default)]
        ts: Option<f64>,
    },
    /// Verbindungsstatus des Messgeräts
    BleStatus(DeviceStatus),
}

/// Status des Entfernungsmessers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeviceStatus {
    /// Gerät verbunden
    pub connected: bool,
    /// Gerätename
    #[serde(default)]
    pub device_name: Option<String>,
    /// Geräteadresse
    #[serde(default)]
    pub device_address: Option<String>,
    /// Zeitpunkt der letzten Geräteaktivität
    #[serde(default)]
    pub last_seen_ts: Option<f64>,
}

impl DeviceStatus {
    /// Anzeigetext: `Name • Adresse`, fehlende Teile entfallen.
    pub fn label(&self) -> String {
        let parts: Vec<&str> = [self.device_name.as_deref(), self.device_address.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();
        parts.join(" • ")
    }
}

/// Dekodiert einen Text-Frame. Leerer Text und unbekannte Typen ergeben `Ok(None)`.
pub fn decode_text(text: &str) -> anyhow::Result<Option<LinkMessage>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let value: serde_json::Value = serde_json::from_str(text)?;
    match value.get("type").and_then(|t| t.as_str()) {
        Some("measure") | Some("ble_status") => Ok(Some(serde_json::from_value(value)?)),
        other => {
            log::debug!("Unbekannter Nachrichtentyp ignoriert: {:?}", other);
            Ok(None)
        }
    }
}
