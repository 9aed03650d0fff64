//! Handler für Ereignisse der Messverbindung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::link::DeviceStatus;

/// Übernimmt eine neue Messung.
pub fn apply_measurement(state: &mut AppState, value_m: f64) {
    use_cases::link::apply_measurement(state, value_m);
}

/// Übernimmt den Gerätestatus.
pub fn apply_device_status(state: &mut AppState, status: DeviceStatus) {
    use_cases::link::apply_device_status(state, status);
}

/// Merkt den Verbindungsstatus zur Bridge.
pub fn set_bridge_connected(state: &mut AppState, connected: bool) {
    use_cases::link::set_bridge_connected(state, connected);
}
