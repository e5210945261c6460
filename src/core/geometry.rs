//! Rein-mathematische Hilfsfunktionen: Abstand, Lot-Strecke, Quadranten.
//!
//! Alle Koordinaten sind Layout-Koordinaten des Diagramms (+X = rechts, +Y = unten).

use glam::Vec2;

/// Quadrant eines Punkts relativ zu einem Zentrum, im Uhrzeigersinn nummeriert.
///
/// Punkte exakt auf einer Achse: `x == center.x` zählt zur rechten Hälfte,
/// `y == center.y` zur oberen Hälfte. Das Zentrum selbst liegt damit in `UpperRight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Quadrant 1: rechts oben
    UpperRight,
    /// Quadrant 2: rechts unten
    LowerRight,
    /// Quadrant 3: links unten
    LowerLeft,
    /// Quadrant 4: links oben
    UpperLeft,
}

impl Quadrant {
    /// Nummer des Quadranten (1–4).
    pub fn index(self) -> u8 {
        match self {
            Quadrant::UpperRight => 1,
            Quadrant::LowerRight => 2,
            Quadrant::LowerLeft => 3,
            Quadrant::UpperLeft => 4,
        }
    }

    /// `true` für die Quadranten 1 und 3.
    pub fn is_odd(self) -> bool {
        matches!(self, Quadrant::UpperRight | Quadrant::LowerLeft)
    }

    /// Diagonal gegenüberliegender Quadrant.
    pub fn opposite(self) -> Self {
        match self {
            Quadrant::UpperRight => Quadrant::LowerLeft,
            Quadrant::LowerRight => Quadrant::UpperLeft,
            Quadrant::LowerLeft => Quadrant::UpperRight,
            Quadrant::UpperLeft => Quadrant::LowerRight,
        }
    }
}

/// Euklidischer Abstand zweier Punkte.
pub fn distance(p: Vec2, q: Vec2) -> f32 {
    p.distance(q)
}

/// Mittelpunkt zwischen zwei Punkten.
pub fn midpoint(p: Vec2, q: Vec2) -> Vec2 {
    (p + q) * 0.5
}

/// Linke obere Ecke des Rechtecks, das beide Punkte umschließt.
pub fn origin_of(p: Vec2, q: Vec2) -> Vec2 {
    p.min(q)
}

/// Bestimmt den Quadranten von `point` relativ zu `center`.
pub fn quadrant(center: Vec2, point: Vec2) -> Quadrant {
    let right = point.x >= center.x;
    let below = point.y > center.y;
    match (right, below) {
        (true, false) => Quadrant::UpperRight,
        (true, true) => Quadrant::LowerRight,
        (false, true) => Quadrant::LowerLeft,
        (false, false) => Quadrant::UpperLeft,
    }
}

/// Strecke der Gesamtlänge `length` durch `center`, senkrecht zu `center → point`.
///
/// Die Reihenfolge der Endpunkte ist deterministisch: der erste liegt rechts vom
/// Zentrum. Bei exakt vertikaler Strecke liegt er auf der Seite von
/// `(point − center).perp()`, d.h. unterhalb bei Zeiger rechts, oberhalb bei Zeiger
/// links. Damit bleibt die Reihenfolge innerhalb eines Quadranten stetig, auch auf
/// der horizontalen Achse. Fällt `point` mit `center` zusammen, kollabieren beide
/// Endpunkte auf `center`.
pub fn perpendicular_line_to(center: Vec2, point: Vec2, length: f32) -> [Vec2; 2] {
    let direction = (point - center).normalize_or_zero();
    let mut normal = direction.perp();
    if normal.x < 0.0 {
        normal = -normal;
    }
    let half = normal * (length * 0.5);
    [center + half, center - half]
}
