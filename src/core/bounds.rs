//! Achsenparalleles Rechteck eines Diagramm-Elements.

use super::face::{Face, FaceMidpoints};
use glam::Vec2;

/// Position (linke obere Ecke) und Größe eines Elements in Layout-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementBounds {
    pub offset: Vec2,
    pub size: Vec2,
}

impl ElementBounds {
    pub fn new(offset: Vec2, size: Vec2) -> Self {
        Self { offset, size }
    }

    pub fn center(&self) -> Vec2 {
        self.offset + self.size * 0.5
    }

    /// Mittelpunkt der angegebenen Seite.
    pub fn face_midpoint(&self, face: Face) -> Vec2 {
        let center = self.center();
        match face {
            Face::Left => Vec2::new(self.offset.x, center.y),
            Face::Top => Vec2::new(center.x, self.offset.y),
            Face::Right => Vec2::new(self.offset.x + self.size.x, center.y),
            Face::Bottom => Vec2::new(center.x, self.offset.y + self.size.y),
        }
    }

    pub fn face_midpoints(&self) -> FaceMidpoints {
        FaceMidpoints::from_bounds(self)
    }
}
