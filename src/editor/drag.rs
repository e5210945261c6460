//! Drag-Logik: übersetzt Zeiger-Positionen in Steuerpunkte.

use super::handle::HandleRole;
use super::session::{EditorSession, EndpointFrame};
use crate::core::{distance, perpendicular_line_to, quadrant, ControlPoints, EditMode};
use crate::host::DiagramHost;
use glam::Vec2;

/// Steuerpunkte der Dual-Kurve für einen Drag-Punkt.
///
/// Die Steuerpunkte sind die Endpunkte der Lot-Strecke durch das Zentrum mit
/// halber Länge `radius_factor × |pointer − center|`. Die Kurve wird also bauchiger,
/// je weiter gezogen wird. Quadranten 1/3 und 2/4 vertauschen die Zuordnung,
/// ebenso eine Quelle unterhalb des Ziels (`flip_y`).
pub fn dual_control_points(frame: &EndpointFrame, pointer: Vec2, radius_factor: f32) -> ControlPoints {
    let radius = distance(frame.center, pointer);
    let line = perpendicular_line_to(frame.center, pointer, 2.0 * radius_factor * radius);
    let (first, second) = if quadrant(frame.center, pointer).is_odd() {
        (line[0], line[1])
    } else {
        (line[1], line[0])
    };
    let (cp1, cp2) = if frame.flip_y {
        (second, first)
    } else {
        (first, second)
    };
    ControlPoints::from_absolute(cp1, cp2, frame.origin)
}

impl EditorSession {
    /// Verarbeitet eine Drag-Bewegung des Handles `role` auf die Layout-Position `pointer`.
    ///
    /// Jeder Aufruf leitet Geometrie, Handles, Guidelines und Seiten vollständig
    /// neu ab, verpasste Zwischenschritte hinterlassen daher keinen Zustand.
    pub fn on_handle_drag(&mut self, host: &mut dyn DiagramHost, role: HandleRole, pointer: Vec2) {
        if !role.is_draggable() {
            return;
        }
        let local = pointer - self.frame.origin;
        let dual = self.settings.mode == EditMode::Dual;

        self.points = if !self.kind.lock_handles() {
            match role {
                HandleRole::Second => self.points.with_cp2(local),
                _ => self.points.with_cp1(local),
            }
        } else if dual {
            dual_control_points(&self.frame, pointer, self.settings.radius_factor)
        } else {
            ControlPoints::locked(local)
        };

        self.push_geometry(host);
        self.update_handle_positions(host);
        if dual {
            // Das Drag-Handle folgt dem Zeiger, nicht dem Mittelpunkt der Steuerpunkte
            host.set_visual_position(self.handles.main, pointer);
        }
        self.update_guidelines(host);

        log::debug!(
            "Drag {:?} auf {:?}: cp1={:?} cp2={:?}",
            role,
            pointer,
            self.points.cp1,
            self.points.cp2
        );
    }
}
