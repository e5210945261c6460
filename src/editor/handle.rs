//! Handle-Factory: verschiebbare Marker an Steuerpunkt-Positionen.

use crate::host::{DiagramHost, VisualId, VisualKind};
use glam::Vec2;

/// Basis-Klasse aller Handles. Klicks auf Overlays mit dieser Klasse schließen den Editor nicht.
pub const HANDLE_CLASS: &str = "bezier-handle";
pub const SECONDARY_HANDLE_CLASS: &str = "bezier-handle-secondary";
pub const SECONDARY_SOURCE_CLASS: &str = "bezier-handle-secondary-source";
pub const SECONDARY_TARGET_CLASS: &str = "bezier-handle-secondary-target";

/// Rolle eines Handles innerhalb einer Editier-Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleRole {
    /// Single: Steuerpunkt 1. Dual: zentrales Drag-Handle.
    Main,
    /// Single: Steuerpunkt 2 (ausgeblendet bei gekoppelten Handles)
    Second,
    /// Dual: Anzeige des aufgelösten Steuerpunkts 1
    SourceMarker,
    /// Dual: Anzeige des aufgelösten Steuerpunkts 2
    TargetMarker,
}

impl HandleRole {
    /// Nur Main und Second reagieren auf Drag; die Marker zeigen nur an.
    pub fn is_draggable(self) -> bool {
        matches!(self, HandleRole::Main | HandleRole::Second)
    }
}

/// Die vier Handles einer Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleSet {
    pub main: VisualId,
    pub second: VisualId,
    pub source_marker: VisualId,
    pub target_marker: VisualId,
}

impl HandleSet {
    /// Erzeugt alle Handles unsichtbar an `position`.
    pub fn create(host: &mut dyn DiagramHost, position: Vec2) -> Self {
        Self {
            main: make_handle(host, position, &[]),
            second: make_handle(host, position, &[]),
            source_marker: make_handle(
                host,
                position,
                &[SECONDARY_HANDLE_CLASS, SECONDARY_SOURCE_CLASS],
            ),
            target_marker: make_handle(
                host,
                position,
                &[SECONDARY_HANDLE_CLASS, SECONDARY_TARGET_CLASS],
            ),
        }
    }

    pub fn all(&self) -> [VisualId; 4] {
        [self.main, self.second, self.source_marker, self.target_marker]
    }

    pub fn role_of(&self, visual: VisualId) -> Option<HandleRole> {
        match visual {
            v if v == self.main => Some(HandleRole::Main),
            v if v == self.second => Some(HandleRole::Second),
            v if v == self.source_marker => Some(HandleRole::SourceMarker),
            v if v == self.target_marker => Some(HandleRole::TargetMarker),
            _ => None,
        }
    }
}

/// Erzeugt ein unsichtbares Handle an `position` mit optionalen Zusatzklassen.
pub fn make_handle(host: &mut dyn DiagramHost, position: Vec2, extra_classes: &[&str]) -> VisualId {
    let mut classes = Vec::with_capacity(1 + extra_classes.len());
    classes.push(HANDLE_CLASS);
    classes.extend_from_slice(extra_classes);
    let id = host.create_visual(VisualKind::Handle, &classes);
    host.set_visual_position(id, position);
    host.set_visual_visible(id, false);
    id
}
