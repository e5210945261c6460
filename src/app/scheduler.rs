//! Aufgaben, die erst nach Ende des laufenden Event-Dispatches ausgeführt werden.

use crate::host::ConnectionId;
use std::collections::VecDeque;

/// Verzögerte Aufgabe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Editor der Verbindung aktivieren
    Activate(ConnectionId),
}

/// FIFO-Warteschlange verzögerter Aufgaben. Doppelte Einträge werden verworfen.
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    tasks: VecDeque<DeferredTask>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reiht eine Aufgabe ein, sofern sie nicht schon wartet.
    pub fn push(&mut self, task: DeferredTask) {
        if !self.tasks.contains(&task) {
            self.tasks.push_back(task);
        }
    }

    /// Entfernt alle wartenden Aufgaben einer Verbindung.
    pub fn cancel(&mut self, connection: ConnectionId) {
        self.tasks
            .retain(|task| !matches!(task, DeferredTask::Activate(id) if *id == connection));
    }

    /// Entnimmt alle wartenden Aufgaben in Einreihungs-Reihenfolge.
    pub fn drain(&mut self) -> Vec<DeferredTask> {
        self.tasks.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
