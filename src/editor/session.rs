//! Zustand einer Editier-Sitzung für genau eine Verbindung.

use super::guideline::create_guideline;
use super::handle::{HandleRole, HandleSet};
use crate::core::{
    midpoint, origin_of, ControlPoints, EditMode, EditorKind, Face, FaceMidpoints, FaceSelector,
};
use crate::host::{ConnectionId, DiagramHost, ElementId, EndpointSide, VisualId};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Pro Sitzung feste Einstellungen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub mode: EditMode,
    pub close_on_mouse_up: bool,
    pub clear_on_drag: bool,
    pub guideline_min_extent: f32,
    pub radius_factor: f32,
}

impl SessionSettings {
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            mode: options.default_mode,
            close_on_mouse_up: options.close_on_mouse_up,
            clear_on_drag: options.clear_on_drag,
            guideline_min_extent: options.guideline_min_extent,
            radius_factor: options.dual_radius_factor,
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Endpunkt-Positionen und die daraus abgeleiteten Bezugsgrößen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EndpointFrame {
    pub source: Vec2,
    pub target: Vec2,
    /// Linke obere Ecke des Rechtecks über beide Endpunkte; Bezug aller Steuerpunkte
    pub origin: Vec2,
    /// Mittelpunkt zwischen den Endpunkten; Bezug für Radius/Quadrant im Dual-Modus
    pub center: Vec2,
    /// Quelle liegt unterhalb des Ziels
    pub flip_y: bool,
}

impl EndpointFrame {
    pub fn new(source: Vec2, target: Vec2) -> Self {
        Self {
            source,
            target,
            origin: origin_of(source, target),
            center: midpoint(source, target),
            flip_y: target.y < source.y,
        }
    }

    pub fn read(host: &dyn DiagramHost, connection: ConnectionId) -> Self {
        Self::new(
            host.endpoint_offset(connection, EndpointSide::Source),
            host.endpoint_offset(connection, EndpointSide::Target),
        )
    }
}

/// Steuerpunkte aus der persistierten Geometrie, sonst aus den Connector-Defaults.
pub(crate) fn read_control_points(host: &dyn DiagramHost, connection: ConnectionId) -> ControlPoints {
    match host.connector_geometry(connection) {
        Some(geometry) => ControlPoints::from(geometry),
        None => host.computed_control_points(connection),
    }
}

/// Editor-Sitzung: besitzt Modus, Steuerpunkte, Overlays und Aktivierungszustand.
///
/// Alle Host-Callbacks (Drag, Klick, Endpunkt-Bewegung) laufen als Methoden auf
/// diesem Struct, siehe `lifecycle.rs` und `drag.rs`.
#[derive(Debug, Clone)]
pub struct EditorSession {
    pub(crate) connection: ConnectionId,
    /// Endpunkt-Elemente [Quelle, Ziel]
    pub(crate) elements: [ElementId; 2],
    pub(crate) kind: EditorKind,
    pub(crate) settings: SessionSettings,
    pub(crate) points: ControlPoints,
    pub(crate) frame: EndpointFrame,
    pub(crate) handles: HandleSet,
    /// Guidelines: [Steuerpunkt 1 ↔ Ziel, Steuerpunkt 2 ↔ Quelle]
    pub(crate) guidelines: [VisualId; 2],
    /// Seitenmittelpunkte [Quelle, Ziel]; nur im aktiven Dual-Modus gesetzt
    pub(crate) midpoints: Option<[FaceMidpoints; 2]>,
    /// Zuletzt aufgelöste Seiten [Quelle, Ziel]
    pub(crate) faces: [Option<Face>; 2],
    /// Vor dem Festpinnen gesicherte Seitenauswahl [Quelle, Ziel]
    pub(crate) saved_selectors: [Option<FaceSelector>; 2],
    pub(crate) active: bool,
    /// Dokument-Klick-Listener registriert
    pub(crate) listening: bool,
}

impl EditorSession {
    /// Erstellt die Sitzung: liest Steuerpunkte, baut unsichtbare Overlays und
    /// schreibt die Steuerpunkte als explizite Geometrie zurück.
    pub fn new(
        host: &mut dyn DiagramHost,
        connection: ConnectionId,
        elements: [ElementId; 2],
        kind: EditorKind,
        settings: SessionSettings,
    ) -> Self {
        let frame = EndpointFrame::read(host, connection);
        let points = read_control_points(host, connection);
        let (cp1, cp2) = points.to_absolute(frame.origin);

        let handles = HandleSet::create(host, cp1);
        let handle_size = host.visual_size(handles.second);
        let guidelines = [
            create_guideline(host, handle_size, frame.target, cp1, settings.guideline_min_extent),
            create_guideline(host, handle_size, frame.source, cp2, settings.guideline_min_extent),
        ];

        let mut session = Self {
            connection,
            elements,
            kind,
            settings,
            points,
            frame,
            handles,
            guidelines,
            midpoints: None,
            faces: [None; 2],
            saved_selectors: [None; 2],
            active: false,
            listening: false,
        };
        session.push_geometry(host);
        log::debug!(
            "Editor für Verbindung {} erstellt ({:?}, {:?})",
            connection,
            kind,
            settings.mode
        );
        session
    }

    pub fn connection(&self) -> ConnectionId {
        self.connection
    }

    pub fn kind(&self) -> EditorKind {
        self.kind
    }

    pub fn mode(&self) -> EditMode {
        self.settings.mode
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Wartet die Sitzung auf Dokument-Klicks (Auto-Close)?
    pub fn listens_for_clicks(&self) -> bool {
        self.listening
    }

    pub fn clear_on_drag(&self) -> bool {
        self.settings.clear_on_drag
    }

    pub fn control_points(&self) -> ControlPoints {
        self.points
    }

    pub fn frame(&self) -> &EndpointFrame {
        &self.frame
    }

    pub fn handles(&self) -> &HandleSet {
        &self.handles
    }

    pub fn guidelines(&self) -> [VisualId; 2] {
        self.guidelines
    }

    pub fn handle_role(&self, visual: VisualId) -> Option<HandleRole> {
        self.handles.role_of(visual)
    }

    /// Zuletzt aufgelöste Seite des Endpunkts (nur Dual-Modus).
    pub fn face(&self, side: EndpointSide) -> Option<Face> {
        self.faces[side.index()]
    }

    pub fn elements(&self) -> [ElementId; 2] {
        self.elements
    }

    /// Alle Overlays der Sitzung (vier Handles, zwei Guidelines).
    pub fn visuals(&self) -> [VisualId; 6] {
        let [h1, h2, h3, h4] = self.handles.all();
        [h1, h2, h3, h4, self.guidelines[0], self.guidelines[1]]
    }
}
