//! Use-Case: Ereignisse der Messverbindung übernehmen.

use crate::app::AppState;
use crate::link::DeviceStatus;

/// Speichert die neue Messung als „letzte Messung“.
pub fn apply_measurement(state: &mut AppState, value_m: f64) {
    state.link.last_measure_m = Some(value_m);
    state.ui.status_message = Some(format!("Messung: {:.4} m", value_m));
    log::info!("Messung empfangen: {:.4} m", value_m);
}

/// Übernimmt den Gerätestatus.
pub fn apply_device_status(state: &mut AppState, status: DeviceStatus) {
    if status.connected != state.link.device.connected {
        log::info!(
            "Messgerät {}: {}",
            if status.connected { "verbunden" } else { "getrennt" },
            status.label()
        );
    }
    state.link.device = status;
}

/// Merkt den Verbindungsstatus zur Bridge.
pub fn set_bridge_connected(state: &mut AppState, connected: bool) {
    if state.link.bridge_connected && !connected {
        state.ui.status_message = Some("Verbindung zur Mess-Bridge verloren".to_string());
    }
    state.link.bridge_connected = connected;
}

/// Statuszeile für das Messgerät.
pub fn device_status_text(state: &AppState) -> String {
    let device = &state.link.device;
    if !state.link.bridge_connected {
        return "Bridge: getrennt".to_string();
    }
    if !device.connected {
        return "Gerät: nicht verbunden".to_string();
    }
    let label = device.label();
    if label.is_empty() {
        "Gerät: verbunden".to_string()
    } else {
        format!("Gerät: {}", label)
    }
}
