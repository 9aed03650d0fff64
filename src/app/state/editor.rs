use glam::DVec2;

/// Interaktionszustand der Zeichenfläche.
///
/// Die Indizes verweisen in die Punktliste des aktuellen Dokuments und werden
/// vor jeder Verwendung geprüft (Undo kann sie ungültig machen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Klick setzt einen neuen Punkt
    #[default]
    Idle,
    /// Wartet auf einen Richtungsklick für die letzte Messung
    Placing {
        /// Startpunkt des neuen Segments
        start: usize,
    },
    /// Ein Punkt wird gezogen
    Drag {
        /// Gezogener Punkt
        point: usize,
    },
    /// Klick entfernt Punkt oder Segment
    Delete,
}

impl InteractionMode {
    /// Anzeigename für die Status-Bar.
    pub fn label(&self) -> &'static str {
        match self {
            InteractionMode::Idle => "Zeichnen",
            InteractionMode::Placing { .. } => "Messung platzieren",
            InteractionMode::Drag { .. } => "Verschieben",
            InteractionMode::Delete => "Löschen",
        }
    }

    /// Startpunkt beim Platzieren.
    pub fn placing_start(&self) -> Option<usize> {
        match *self {
            InteractionMode::Placing { start } => Some(start),
            _ => None,
        }
    }

    /// Gezogener Punkt.
    pub fn drag_point(&self) -> Option<usize> {
        match *self {
            InteractionMode::Drag { point } => Some(point),
            _ => None,
        }
    }
}

/// Zustand des Zeichen-Editors.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Aktueller Interaktionsmodus
    pub mode: InteractionMode,
    /// Letzte aufgelöste Cursor-Position (nach Ortho und Snap)
    pub cursor: Option<DVec2>,
    /// Snapping aktiv
    pub snap_enabled: bool,
    /// Ortho-Zwang beim Platzieren aktiv
    pub ortho_enabled: bool,
}

impl EditorState {
    /// Erstellt den Startzustand.
    pub fn new(snap_enabled: bool, ortho_enabled: bool) -> Self {
        Self {
            mode: InteractionMode::Idle,
            cursor: None,
            snap_enabled,
            ortho_enabled,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(true, false)
    }
}
