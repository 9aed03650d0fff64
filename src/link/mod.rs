//! Messverbindung: Nachrichtenformat und WebSocket-Client der Mess-Bridge.

pub mod client;
pub mod message;

pub use client::{LinkEvent, MeasurementLink};
pub use message::{decode_text, DeviceStatus, LinkMessage};
