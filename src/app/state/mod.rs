//! Application State: zentrale Datenhaltung.

mod app_state;
mod editor;
mod ui;
mod view;

pub use app_state::AppState;
pub use editor::{EditorState, InteractionMode};
pub use ui::{ExportKind, LinkState, UiState};
pub use view::{View3dState, ViewState};
