//! Use-Case-Funktionen für das Zeichnen auf der Zeichenfläche.
//!
//! Aufgeteilt nach Operation:
//! - `add_point`: freien Punkt setzen
//! - `measured_segment`: letzte Messung als Segment platzieren
//! - `drag`: Punkt verschieben
//! - `delete`: Punkt oder Segment löschen
//! - `mode`: Moduswechsel ohne Dokumentänderung

mod add_point;
mod delete;
mod drag;
mod measured_segment;
mod mode;

pub use add_point::add_point;
pub use delete::delete_at;
pub use drag::{begin_drag, drag_point_to, end_drag};
pub use measured_segment::{begin_placing, place_measured_segment};
pub use mode::{cancel_interaction, revalidate_mode, toggle_delete_mode, track_pointer};
