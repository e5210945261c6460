//! Steuerpunkte eines kubischen Bézier-Connectors und ihr Austauschformat.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Explizite Connector-Geometrie, wie sie der Host persistiert.
///
/// Serialisiert als `{"controlPoints": [[x, y], [x, y]]}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorGeometry {
    pub control_points: [[f32; 2]; 2],
}

/// Die beiden Steuerpunkte relativ zum Origin des Connectors.
///
/// `cp1` gehört zur Quellseite, `cp2` zur Zielseite. Änderungen liefern einen
/// neuen Wert zurück, es gibt keine geteilten Referenzen auf die Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlPoints {
    pub cp1: Vec2,
    pub cp2: Vec2,
}

impl ControlPoints {
    pub fn new(cp1: Vec2, cp2: Vec2) -> Self {
        Self { cp1, cp2 }
    }

    /// Beide Steuerpunkte auf derselben Position (gekoppelte Handles).
    pub fn locked(point: Vec2) -> Self {
        Self {
            cp1: point,
            cp2: point,
        }
    }

    /// Rechnet absolute Layout-Koordinaten auf den Origin um.
    pub fn from_absolute(cp1: Vec2, cp2: Vec2, origin: Vec2) -> Self {
        Self {
            cp1: cp1 - origin,
            cp2: cp2 - origin,
        }
    }

    pub fn with_cp1(self, cp1: Vec2) -> Self {
        Self { cp1, ..self }
    }

    pub fn with_cp2(self, cp2: Vec2) -> Self {
        Self { cp2, ..self }
    }

    /// Absolute Layout-Koordinaten beider Steuerpunkte.
    pub fn to_absolute(self, origin: Vec2) -> (Vec2, Vec2) {
        (origin + self.cp1, origin + self.cp2)
    }

    pub fn midpoint(self) -> Vec2 {
        (self.cp1 + self.cp2) * 0.5
    }

    pub fn to_geometry(self) -> ConnectorGeometry {
        ConnectorGeometry {
            control_points: [self.cp1.to_array(), self.cp2.to_array()],
        }
    }
}

impl From<ConnectorGeometry> for ControlPoints {
    fn from(geometry: ConnectorGeometry) -> Self {
        let [cp1, cp2] = geometry.control_points;
        Self {
            cp1: Vec2::from_array(cp1),
            cp2: Vec2::from_array(cp2),
        }
    }
}

impl From<ControlPoints> for ConnectorGeometry {
    fn from(points: ControlPoints) -> Self {
        points.to_geometry()
    }
}
