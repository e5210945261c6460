//! In-Memory-Diagramm als vollständige [`DiagramHost`]-Implementierung.
//!
//! Hält Elemente, Verbindungen, Anker und Overlays in `IndexMap`s (deterministische
//! Reihenfolge) und zählt Repaint-Anforderungen. Wird von Tests, Benchmarks und
//! der Demo-Binary genutzt.

use super::{ConnectionId, DiagramHost, ElementId, EndpointSide, VisualId, VisualKind};
use crate::core::{
    origin_of, ConnectorGeometry, ControlPoints, ElementBounds, Face, FaceSelector,
};
use glam::Vec2;
use indexmap::IndexMap;

/// Standard-Auslenkung der Default-Steuerpunkte von ihrem Endpunkt.
pub const DEFAULT_CURVINESS: f32 = 150.0;
/// Standard-Größe eines gerenderten Handles.
pub const DEFAULT_HANDLE_SIZE: Vec2 = Vec2::new(10.0, 10.0);

/// Anker eines Verbindungs-Endpunkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramAnchor {
    /// Kontinuierlicher Anker: wählt seine Seite selbst
    pub continuous: bool,
    /// Feste Seite für nicht-kontinuierliche Anker
    pub face: Face,
    /// Seitenauswahl kontinuierlicher Anker
    pub selector: FaceSelector,
}

impl DiagramAnchor {
    pub fn fixed(face: Face) -> Self {
        Self {
            continuous: false,
            face,
            selector: FaceSelector::Automatic,
        }
    }

    pub fn continuous() -> Self {
        Self {
            continuous: true,
            face: Face::Left,
            selector: FaceSelector::Automatic,
        }
    }
}

/// Eine Verbindung im In-Memory-Diagramm.
#[derive(Debug, Clone)]
pub struct DiagramConnection {
    pub connector_type: String,
    pub editable: bool,
    pub source: ElementId,
    pub target: ElementId,
    /// Anker [Quelle, Ziel]
    pub anchors: [DiagramAnchor; 2],
    pub geometry: Option<ConnectorGeometry>,
    pub classes: Vec<String>,
}

impl DiagramConnection {
    /// Neue editierbare Verbindung mit festen Ankern (Quelle rechts, Ziel links).
    pub fn new(connector_type: impl Into<String>, source: ElementId, target: ElementId) -> Self {
        Self {
            connector_type: connector_type.into(),
            editable: true,
            source,
            target,
            anchors: [DiagramAnchor::fixed(Face::Right), DiagramAnchor::fixed(Face::Left)],
            geometry: None,
            classes: Vec::new(),
        }
    }

    pub fn with_anchors(mut self, source: DiagramAnchor, target: DiagramAnchor) -> Self {
        self.anchors = [source, target];
        self
    }

    pub fn with_geometry(mut self, geometry: ConnectorGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Ein Overlay (Handle oder Guideline).
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayVisual {
    pub kind: VisualKind,
    pub classes: Vec<String>,
    pub position: Vec2,
    pub size: Vec2,
    pub path: String,
    pub visible: bool,
}

/// In-Memory-Diagramm.
#[derive(Debug, Clone)]
pub struct MemoryDiagram {
    elements: IndexMap<ElementId, ElementBounds>,
    connections: IndexMap<ConnectionId, DiagramConnection>,
    visuals: IndexMap<VisualId, OverlayVisual>,
    next_visual_id: VisualId,
    handle_size: Vec2,
    curviness: f32,
    element_repaints: IndexMap<ElementId, usize>,
    connection_repaints: IndexMap<ConnectionId, usize>,
}

impl Default for MemoryDiagram {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDiagram {
    pub fn new() -> Self {
        Self {
            elements: IndexMap::new(),
            connections: IndexMap::new(),
            visuals: IndexMap::new(),
            next_visual_id: 1,
            handle_size: DEFAULT_HANDLE_SIZE,
            curviness: DEFAULT_CURVINESS,
            element_repaints: IndexMap::new(),
            connection_repaints: IndexMap::new(),
        }
    }

    pub fn with_curviness(mut self, curviness: f32) -> Self {
        self.curviness = curviness;
        self
    }

    pub fn with_handle_size(mut self, size: Vec2) -> Self {
        self.handle_size = size;
        self
    }

    pub fn add_element(&mut self, id: ElementId, bounds: ElementBounds) {
        self.elements.insert(id, bounds);
    }

    /// Verschiebt ein Element (Größe bleibt erhalten).
    pub fn move_element(&mut self, id: ElementId, offset: Vec2) {
        if let Some(bounds) = self.elements.get_mut(&id) {
            bounds.offset = offset;
        }
    }

    pub fn add_connection(&mut self, id: ConnectionId, connection: DiagramConnection) {
        self.connections.insert(id, connection);
    }

    pub fn remove_connection(&mut self, id: ConnectionId) -> Option<DiagramConnection> {
        self.connections.shift_remove(&id)
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&DiagramConnection> {
        self.connections.get(&id)
    }

    pub fn visual(&self, id: VisualId) -> Option<&OverlayVisual> {
        self.visuals.get(&id)
    }

    pub fn visual_count(&self) -> usize {
        self.visuals.len()
    }

    pub fn visible_visual_count(&self) -> usize {
        self.visuals.values().filter(|v| v.visible).count()
    }

    pub fn element_repaints(&self, id: ElementId) -> usize {
        self.element_repaints.get(&id).copied().unwrap_or(0)
    }

    pub fn connection_repaints(&self, id: ConnectionId) -> usize {
        self.connection_repaints.get(&id).copied().unwrap_or(0)
    }

    /// Seite, an der der Endpunkt aktuell andockt.
    ///
    /// Kontinuierliche Anker wählen die erlaubte Seite, deren Mittelpunkt dem
    /// Zentrum des Gegen-Elements am nächsten liegt.
    pub fn anchor_face(&self, connection: ConnectionId, side: EndpointSide) -> Option<Face> {
        let conn = self.connections.get(&connection)?;
        let anchor = conn.anchors[side.index()];
        if !anchor.continuous {
            return Some(anchor.face);
        }
        let (own, other) = match side {
            EndpointSide::Source => (conn.source, conn.target),
            EndpointSide::Target => (conn.target, conn.source),
        };
        let own_bounds = self.elements.get(&own)?;
        let toward = self.elements.get(&other)?.center();
        Some(own_bounds.face_midpoints().nearest_allowed(toward, anchor.selector))
    }
}

impl DiagramHost for MemoryDiagram {
    fn connector_type(&self, connection: ConnectionId) -> Option<String> {
        self.connections
            .get(&connection)
            .map(|c| c.connector_type.clone())
    }

    fn is_connector_editable(&self, connection: ConnectionId) -> bool {
        self.connections
            .get(&connection)
            .is_some_and(|c| c.editable)
    }

    fn endpoint_element(&self, connection: ConnectionId, side: EndpointSide) -> Option<ElementId> {
        self.connections.get(&connection).map(|c| match side {
            EndpointSide::Source => c.source,
            EndpointSide::Target => c.target,
        })
    }

    fn endpoint_offset(&self, connection: ConnectionId, side: EndpointSide) -> Vec2 {
        let bounds = self
            .endpoint_element(connection, side)
            .and_then(|id| self.elements.get(&id));
        match (bounds, self.anchor_face(connection, side)) {
            (Some(bounds), Some(face)) => bounds.face_midpoint(face),
            _ => Vec2::ZERO,
        }
    }

    fn element_bounds(&self, element: ElementId) -> Option<ElementBounds> {
        self.elements.get(&element).copied()
    }

    fn connector_geometry(&self, connection: ConnectionId) -> Option<ConnectorGeometry> {
        self.connections.get(&connection).and_then(|c| c.geometry)
    }

    fn set_connector_geometry(&mut self, connection: ConnectionId, geometry: Option<ConnectorGeometry>) {
        if let Some(conn) = self.connections.get_mut(&connection) {
            conn.geometry = geometry;
        }
    }

    fn computed_control_points(&self, connection: ConnectionId) -> ControlPoints {
        let source = self.endpoint_offset(connection, EndpointSide::Source);
        let target = self.endpoint_offset(connection, EndpointSide::Target);
        let origin = origin_of(source, target);
        let source_face = self
            .anchor_face(connection, EndpointSide::Source)
            .unwrap_or(Face::Right);
        let target_face = self
            .anchor_face(connection, EndpointSide::Target)
            .unwrap_or(Face::Left);
        ControlPoints::from_absolute(
            source + source_face.normal() * self.curviness,
            target + target_face.normal() * self.curviness,
            origin,
        )
    }

    fn repaint_connection(&mut self, connection: ConnectionId) {
        *self.connection_repaints.entry(connection).or_insert(0) += 1;
    }

    fn repaint_element(&mut self, element: ElementId) {
        *self.element_repaints.entry(element).or_insert(0) += 1;
    }

    fn add_connection_class(&mut self, connection: ConnectionId, class: &str) {
        if let Some(conn) = self.connections.get_mut(&connection) {
            if !conn.has_class(class) {
                conn.classes.push(class.to_string());
            }
        }
    }

    fn remove_connection_class(&mut self, connection: ConnectionId, class: &str) {
        if let Some(conn) = self.connections.get_mut(&connection) {
            conn.classes.retain(|c| c != class);
        }
    }

    fn anchor_is_continuous(&self, connection: ConnectionId, side: EndpointSide) -> bool {
        self.connections
            .get(&connection)
            .is_some_and(|c| c.anchors[side.index()].continuous)
    }

    fn face_selector(&self, connection: ConnectionId, side: EndpointSide) -> FaceSelector {
        self.connections
            .get(&connection)
            .map_or(FaceSelector::Automatic, |c| c.anchors[side.index()].selector)
    }

    fn set_face_selector(&mut self, connection: ConnectionId, side: EndpointSide, selector: FaceSelector) {
        if let Some(conn) = self.connections.get_mut(&connection) {
            conn.anchors[side.index()].selector = selector;
        }
    }

    fn create_visual(&mut self, kind: VisualKind, classes: &[&str]) -> VisualId {
        let id = self.next_visual_id;
        self.next_visual_id += 1;
        let size = match kind {
            VisualKind::Handle => self.handle_size,
            VisualKind::Guideline => Vec2::ZERO,
        };
        self.visuals.insert(
            id,
            OverlayVisual {
                kind,
                classes: classes.iter().map(|c| c.to_string()).collect(),
                position: Vec2::ZERO,
                size,
                path: String::new(),
                visible: false,
            },
        );
        id
    }

    fn remove_visual(&mut self, visual: VisualId) {
        self.visuals.shift_remove(&visual);
    }

    fn set_visual_position(&mut self, visual: VisualId, position: Vec2) {
        if let Some(v) = self.visuals.get_mut(&visual) {
            v.position = position;
        }
    }

    fn set_visual_size(&mut self, visual: VisualId, size: Vec2) {
        if let Some(v) = self.visuals.get_mut(&visual) {
            v.size = size;
        }
    }

    fn set_visual_path(&mut self, visual: VisualId, path: &str) {
        if let Some(v) = self.visuals.get_mut(&visual) {
            v.path = path.to_string();
        }
    }

    fn set_visual_visible(&mut self, visual: VisualId, visible: bool) {
        if let Some(v) = self.visuals.get_mut(&visual) {
            v.visible = visible;
        }
    }

    fn visual_size(&self, visual: VisualId) -> Vec2 {
        self.visuals.get(&visual).map_or(Vec2::ZERO, |v| v.size)
    }

    fn visual_has_class(&self, visual: VisualId, class: &str) -> bool {
        self.visuals
            .get(&visual)
            .is_some_and(|v| v.classes.iter().any(|c| c == class))
    }
}
