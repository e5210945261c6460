//! Bézier Connector Editor Library.
//! Interaktiver Editor für kubische Bézier-Connectoren einer Diagramm-Oberfläche.

pub mod app;
pub mod core;
pub mod editor;
pub mod host;
pub mod shared;

pub use app::{
    DeferredQueue, DeferredTask, EditRequest, EditorController, EditorError, EditorEvent,
    EditorRegistry,
};
pub use core::{
    distance, perpendicular_line_to, quadrant, ConnectorGeometry, ControlPoints, EditMode,
    EditorKind, ElementBounds, Face, FaceMidpoints, FaceSelector, Quadrant,
};
pub use editor::{EditorSession, GuidelineGeometry, HandleRole, SessionSettings};
pub use host::{
    ClickTarget, ConnectionId, DiagramAnchor, DiagramConnection, DiagramHost, ElementId,
    EndpointSide, MemoryDiagram, VisualId,
};
pub use shared::EditorOptions;
