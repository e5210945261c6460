//! Guidelines: Hilfslinie vom festen Endpunkt zum Mittelpunkt eines Handles.
//!
//! Die Linie liegt als Diagonale in einem Container, der das Rechteck zwischen
//! Anker und Handle-Mitte aufspannt. Welche Diagonale gezeichnet wird, hängt vom
//! Quadranten des Handles relativ zum Anker ab.

use crate::host::{DiagramHost, VisualId, VisualKind};
use glam::Vec2;

pub const GUIDELINE_CLASS: &str = "bezier-guideline";

/// Container-Rechteck und Linienendpunkte (lokal zum Container).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidelineGeometry {
    /// Linke obere Ecke des Containers in Layout-Koordinaten
    pub position: Vec2,
    /// Container-Größe, mindestens `min_extent` je Achse
    pub size: Vec2,
    pub from: Vec2,
    pub to: Vec2,
}

impl GuidelineGeometry {
    /// Berechnet die Geometrie für ein Handle an `handle_pos` (linke obere Ecke).
    ///
    /// Die Linie endet in der Mitte des Handles, daher wird um die halbe
    /// Handle-Größe verschoben.
    pub fn compute(handle_size: Vec2, anchor: Vec2, handle_pos: Vec2, min_extent: f32) -> Self {
        let tip = handle_pos + handle_size * 0.5;
        let size = Vec2::new(
            (tip.x - anchor.x).abs().max(min_extent),
            (tip.y - anchor.y).abs().max(min_extent),
        );
        let right = tip.x > anchor.x;
        let below = tip.y > anchor.y;
        let from = Vec2::new(
            if right { size.x } else { 0.0 },
            if below { size.y } else { 0.0 },
        );
        let to = Vec2::new(
            if right { 0.0 } else { size.x },
            if below { 0.0 } else { size.y },
        );
        Self {
            position: tip.min(anchor),
            size,
            from,
            to,
        }
    }

    /// SVG-Pfad `M x y L x y` in Container-Koordinaten.
    pub fn svg_path(&self) -> String {
        format!(
            "M {} {} L {} {}",
            self.from.x, self.from.y, self.to.x, self.to.y
        )
    }
}

/// Erzeugt eine unsichtbare Guideline zwischen `anchor` und dem Handle an `handle_pos`.
pub fn create_guideline(
    host: &mut dyn DiagramHost,
    handle_size: Vec2,
    anchor: Vec2,
    handle_pos: Vec2,
    min_extent: f32,
) -> VisualId {
    let id = host.create_visual(VisualKind::Guideline, &[GUIDELINE_CLASS]);
    host.set_visual_visible(id, false);
    apply(
        host,
        id,
        &GuidelineGeometry::compute(handle_size, anchor, handle_pos, min_extent),
    );
    id
}

/// Aktualisiert eine Guideline anhand der aktuell gerenderten Größe von `handle`.
pub fn update_guideline(
    host: &mut dyn DiagramHost,
    line: VisualId,
    handle: VisualId,
    anchor: Vec2,
    handle_pos: Vec2,
    min_extent: f32,
) {
    let handle_size = host.visual_size(handle);
    apply(
        host,
        line,
        &GuidelineGeometry::compute(handle_size, anchor, handle_pos, min_extent),
    );
}

fn apply(host: &mut dyn DiagramHost, line: VisualId, geometry: &GuidelineGeometry) {
    host.set_visual_position(line, geometry.position);
    host.set_visual_size(line, geometry.size);
    host.set_visual_path(line, &geometry.svg_path());
}
