use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::snap::SnapSettings;
use crate::core::PlanDocument;
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorState, LinkState, UiState, View3dState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Dokument (Arc für O(1)-Snapshots)
    pub document: Arc<PlanDocument>,
    /// Editor-Zustand (Modus, Cursor, Snap/Ortho)
    pub editor: EditorState,
    /// View-State der 2D-Zeichenfläche
    pub view: ViewState,
    /// 3D-Vorschau
    pub view3d: View3dState,
    /// Messverbindung
    pub link: LinkState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            document: Arc::new(PlanDocument::new(options.default_px_per_m)),
            editor: EditorState::new(options.snap_enabled, options.ortho_enabled),
            view: ViewState::new(options.show_grid, options.canvas_size),
            view3d: View3dState::new(options.default_wall_height_m),
            link: LinkState::default(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_capacity),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.document.plan.point_count()
    }

    /// Gibt die Anzahl der Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.document.plan.segment_count()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Dokuments.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Mutierbarer Zugriff auf das Dokument (Copy-on-Write).
    pub fn document_mut(&mut self) -> &mut PlanDocument {
        Arc::make_mut(&mut self.document)
    }

    /// Snap-Parameter aus Editor-Schalter und Optionen.
    pub fn snap_settings(&self) -> SnapSettings {
        SnapSettings {
            enabled: self.editor.snap_enabled,
            point_radius: self.options.snap_point_radius_px,
            grid_step: self.options.grid_step_px,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
