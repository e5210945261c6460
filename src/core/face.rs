//! Seiten (Faces) eines Element-Rechtecks und die Auswahl der nächstgelegenen Seite.

use super::bounds::ElementBounds;
use super::geometry::distance;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Eine der vier Seiten eines Element-Rechtecks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Left,
    Top,
    Right,
    Bottom,
}

impl Face {
    /// Alle Seiten in fester Reihenfolge (bestimmt den Tie-Break bei gleichen Abständen).
    pub const ALL: [Face; 4] = [Face::Left, Face::Top, Face::Right, Face::Bottom];

    pub fn as_str(self) -> &'static str {
        match self {
            Face::Left => "left",
            Face::Top => "top",
            Face::Right => "right",
            Face::Bottom => "bottom",
        }
    }

    /// Nach außen zeigende Einheitsnormale der Seite.
    pub fn normal(self) -> Vec2 {
        match self {
            Face::Left => Vec2::NEG_X,
            Face::Top => Vec2::NEG_Y,
            Face::Right => Vec2::X,
            Face::Bottom => Vec2::Y,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seitenauswahl eines Ankers.
///
/// `Automatic` lässt den Anker seine Seite selbst bestimmen, `Pinned` hält ihn
/// während einer Editier-Sitzung auf einer festen Seite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceSelector {
    #[default]
    Automatic,
    Pinned(Face),
}

impl FaceSelector {
    /// Darf der Anker an `face` andocken?
    pub fn allows(self, face: Face) -> bool {
        match self {
            FaceSelector::Automatic => true,
            FaceSelector::Pinned(pinned) => pinned == face,
        }
    }
}

/// Mittelpunkt einer Seite samt Seiten-Label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMidpoint {
    pub position: Vec2,
    pub face: Face,
}

/// Die vier Seitenmittelpunkte eines Elements, in `Face::ALL`-Reihenfolge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMidpoints([FaceMidpoint; 4]);

impl FaceMidpoints {
    /// Berechnet die Seitenmittelpunkte aus dem Element-Rechteck.
    pub fn from_bounds(bounds: &ElementBounds) -> Self {
        Self(Face::ALL.map(|face| FaceMidpoint {
            position: bounds.face_midpoint(face),
            face,
        }))
    }

    pub fn as_slice(&self) -> &[FaceMidpoint] {
        &self.0
    }

    /// Seite, deren Mittelpunkt `reference` am nächsten liegt.
    ///
    /// Stabile Sortierung: bei gleichem Abstand gewinnt die zuerst gelistete Seite.
    pub fn nearest(&self, reference: Vec2) -> Face {
        self.nearest_allowed(reference, FaceSelector::Automatic)
    }

    /// Wie [`Self::nearest`], berücksichtigt aber nur Seiten, die `selector` erlaubt.
    pub fn nearest_allowed(&self, reference: Vec2, selector: FaceSelector) -> Face {
        let mut candidates: Vec<(Face, f32)> = self
            .0
            .iter()
            .filter(|m| selector.allows(m.face))
            .map(|m| (m.face, distance(m.position, reference)))
            .collect();
        candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
            .first()
            .map_or(Face::ALL[0], |(face, _)| *face)
    }
}
