//! Core-Domänentypen: Geometrie, Seiten, Steuerpunkte, Element-Rechtecke, Modi.

pub mod bounds;
pub mod control_points;
pub mod face;
pub mod geometry;
pub mod mode;

pub use bounds::ElementBounds;
pub use control_points::{ConnectorGeometry, ControlPoints};
pub use face::{Face, FaceMidpoint, FaceMidpoints, FaceSelector};
pub use geometry::{distance, midpoint, origin_of, perpendicular_line_to, quadrant, Quadrant};
pub use mode::{EditMode, EditorKind};
