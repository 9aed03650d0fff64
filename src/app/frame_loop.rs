//! Abbrechbare Render-Schleife der 3D-Vorschau.
//!
//! Läuft, solange das 3D-Fenster offen ist; `cancel` beendet sie beim Schließen.

/// Zustand der per-Frame-Schleife.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLoop {
    running: bool,
    frames: u64,
}

impl FrameLoop {
    /// Erstellt eine gestoppte Schleife.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet die Schleife. Ein zweiter Start ohne `cancel` erzeugt keine zweite Schleife.
    ///
    /// Gibt `true` zurück, wenn die Schleife neu gestartet wurde.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.frames = 0;
        log::debug!("3D-Frame-Loop gestartet");
        true
    }

    /// Beendet die Schleife.
    pub fn cancel(&mut self) {
        if self.running {
            log::debug!("3D-Frame-Loop beendet nach {} Frames", self.frames);
        }
        self.running = false;
    }

    /// Läuft die Schleife?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Gezeichnete Frames seit dem letzten Start.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Ein Frame: `true`, wenn gezeichnet und ein weiterer Frame angefordert werden soll.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.frames += 1;
        true
    }
}
