//! Host-Ereignisse, die der Controller an die Editor-Sitzungen verteilt.

use crate::host::{ClickTarget, ConnectionId, ElementId, VisualId};
use glam::Vec2;

/// Eingaben aus der Diagramm-Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    /// Ein Handle wurde auf die Layout-Position `pointer` gezogen
    HandleDragged { visual: VisualId, pointer: Vec2 },
    /// Mouse-up irgendwo im Dokument
    DocumentClicked { target: ClickTarget },
    /// Drag eines Endpunkt-Elements beginnt
    ElementDragStarted { element: ElementId },
    /// Endpunkt-Element wird gezogen
    ElementDragged { element: ElementId },
    /// Verbindung wurde aus dem Diagramm entfernt
    ConnectionRemoved { connection: ConnectionId },
}
