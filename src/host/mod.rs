//! Schnittstelle zur umgebenden Diagramm-Oberfläche.
//!
//! Der Editor erzeugt und positioniert Overlays, liest Endpunkt-Offsets und
//! schreibt Connector-Geometrie ausschließlich über [`DiagramHost`]. Rendering,
//! Drag-Primitive und Anker-Berechnung bleiben Sache des Hosts.

pub mod memory;

use crate::core::{ConnectorGeometry, ControlPoints, ElementBounds, FaceSelector};
use glam::Vec2;

pub use memory::{DiagramAnchor, DiagramConnection, MemoryDiagram, OverlayVisual};

/// ID eines Diagramm-Elements (Node).
pub type ElementId = u64;
/// ID einer Verbindung.
pub type ConnectionId = u64;
/// ID eines vom Editor erzeugten Overlays (Handle oder Guideline).
pub type VisualId = u64;

/// Quell- oder Zielseite einer Verbindung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointSide {
    Source,
    Target,
}

impl EndpointSide {
    pub const BOTH: [EndpointSide; 2] = [EndpointSide::Source, EndpointSide::Target];

    pub fn index(self) -> usize {
        match self {
            EndpointSide::Source => 0,
            EndpointSide::Target => 1,
        }
    }
}

/// Art eines Overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    Handle,
    Guideline,
}

/// Ursprung eines Dokument-Klicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Visual(VisualId),
    Element(ElementId),
    Background,
}

/// Vom Editor benötigte Fähigkeiten der Diagramm-Oberfläche.
pub trait DiagramHost {
    // ── Verbindungen ────────────────────────────────────────────

    /// Connector-Typ der Verbindung (`None` = Verbindung unbekannt).
    fn connector_type(&self, connection: ConnectionId) -> Option<String>;
    fn is_connector_editable(&self, connection: ConnectionId) -> bool;
    fn endpoint_element(&self, connection: ConnectionId, side: EndpointSide) -> Option<ElementId>;
    /// Aktuelle Position des Endpunkts in Layout-Koordinaten.
    fn endpoint_offset(&self, connection: ConnectionId, side: EndpointSide) -> Vec2;
    fn element_bounds(&self, element: ElementId) -> Option<ElementBounds>;
    /// Explizit gesetzte Geometrie, `None` wenn der Connector seine Defaults nutzt.
    fn connector_geometry(&self, connection: ConnectionId) -> Option<ConnectorGeometry>;
    fn set_connector_geometry(&mut self, connection: ConnectionId, geometry: Option<ConnectorGeometry>);
    /// Vom Connector selbst berechnete Default-Steuerpunkte (relativ zum Origin).
    fn computed_control_points(&self, connection: ConnectionId) -> ControlPoints;
    fn repaint_connection(&mut self, connection: ConnectionId);
    fn repaint_element(&mut self, element: ElementId);
    fn add_connection_class(&mut self, connection: ConnectionId, class: &str);
    fn remove_connection_class(&mut self, connection: ConnectionId, class: &str);

    // ── Anker ───────────────────────────────────────────────────

    fn anchor_is_continuous(&self, connection: ConnectionId, side: EndpointSide) -> bool;
    fn face_selector(&self, connection: ConnectionId, side: EndpointSide) -> FaceSelector;
    fn set_face_selector(&mut self, connection: ConnectionId, side: EndpointSide, selector: FaceSelector);

    // ── Overlays ────────────────────────────────────────────────

    /// Erzeugt ein unsichtbares Overlay mit den angegebenen Style-Klassen.
    fn create_visual(&mut self, kind: VisualKind, classes: &[&str]) -> VisualId;
    fn remove_visual(&mut self, visual: VisualId);
    fn set_visual_position(&mut self, visual: VisualId, position: Vec2);
    fn set_visual_size(&mut self, visual: VisualId, size: Vec2);
    fn set_visual_path(&mut self, visual: VisualId, path: &str);
    fn set_visual_visible(&mut self, visual: VisualId, visible: bool);
    /// Gerenderte Größe des Overlays.
    fn visual_size(&self, visual: VisualId) -> Vec2;
    fn visual_has_class(&self, visual: VisualId, class: &str) -> bool;
}
