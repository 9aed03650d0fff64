//! UI-Komponenten: Menü, Toolbar, Zeichenfläche, 3D-Fenster, Dialoge.

pub mod canvas;
pub mod dialogs;
mod keyboard;
/// UI-Layer mit egui
///
/// Alle Komponenten lesen den AppState und liefern `AppIntent`s zurück;
/// Zustandsänderungen laufen ausschließlich über den Controller.
pub mod menu;
pub mod painter;
pub mod status;
pub mod toolbar;
pub mod view3d;

pub use canvas::render_canvas;
pub use dialogs::{handle_file_dialogs, show_error_dialog};
pub use menu::render_menu;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
pub use view3d::show_view3d_window;
