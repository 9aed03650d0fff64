use crate::core::PlanDocument;
use std::collections::VecDeque;
use std::sync::Arc;

/// Undo-Snapshot: das vollständige Dokument (Punkte, Segmente, Maßstab, Titel).
///
/// Arc-Clone statt Deep-Clone: der eigentliche Klon passiert erst beim nächsten
/// `Arc::make_mut()` in einem Use-Case.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Dokument zum Zeitpunkt des Snapshots
    pub document: Arc<PlanDocument>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot des aktuellen Dokuments.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            document: Arc::clone(&state.document),
        }
    }

    /// Ersetzt das Dokument im State vollständig.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.document = self.document;
    }
}

/// Begrenzter Undo/Redo-Verlauf. Älteste Einträge fallen bei Überlauf heraus.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: VecDeque<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(max_depth),
            redo_stack: VecDeque::with_capacity(max_depth),
            max_depth: max_depth.max(1),
        }
    }

    fn push_bounded(stack: &mut VecDeque<Snapshot>, snap: Snapshot, max_depth: usize) {
        while stack.len() >= max_depth {
            stack.pop_front();
        }
        stack.push_back(snap);
    }

    /// Legt einen Snapshot vor einer Mutation ab und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        Self::push_bounded(&mut self.undo_stack, snap, self.max_depth);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl verfügbarer Undo-Schritte.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Anzahl verfügbarer Redo-Schritte.
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Holt den letzten Undo-Snapshot und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop_back()?;
        Self::push_bounded(&mut self.redo_stack, current, self.max_depth);
        Some(prev)
    }

    /// Holt den letzten Redo-Snapshot und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop_back()?;
        Self::push_bounded(&mut self.undo_stack, current, self.max_depth);
        Some(next)
    }
}
