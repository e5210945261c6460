//! Lifecycle-Methoden der EditorSession (activate, deactivate, reset, update, dispose)
//! und die gemeinsamen Nachführ-Routinen für Handles, Guidelines und Seiten.

use super::guideline::update_guideline;
use super::handle::HANDLE_CLASS;
use super::session::{read_control_points, EditorSession, EndpointFrame};
use crate::core::{EditMode, FaceMidpoints, FaceSelector};
use crate::host::{ClickTarget, DiagramHost, EndpointSide};

/// Style-Klasse der Verbindung, solange sie editiert wird.
pub const CONNECTION_EDIT_CLASS: &str = "connection-edit";

impl EditorSession {
    /// Zeigt die Overlays des Modus an und registriert den Klick-Listener.
    ///
    /// Idempotent: Overlays existieren seit der Konstruktion und werden nur eingeblendet.
    pub fn activate(&mut self, host: &mut dyn DiagramHost) {
        let dual = self.settings.mode == EditMode::Dual;
        self.active = true;
        self.refresh_connector_info(host);

        host.set_visual_visible(self.handles.main, true);
        if !self.kind.lock_handles() {
            host.set_visual_visible(self.handles.second, true);
        }
        if dual {
            host.set_visual_visible(self.handles.source_marker, true);
            host.set_visual_visible(self.handles.target_marker, true);
            self.save_face_selectors(host);
        }

        self.update_handle_positions(host);

        for line in self.guidelines {
            host.set_visual_visible(line, true);
        }
        self.update_guidelines(host);

        host.add_connection_class(self.connection, CONNECTION_EDIT_CLASS);
        if self.settings.close_on_mouse_up {
            self.listening = true;
        }
        log::info!("Editor für Verbindung {} aktiviert", self.connection);
    }

    /// Blendet alle Overlays aus und stellt die Seitenauswahl der Anker wieder her.
    ///
    /// Stammt der auslösende Klick von einem Handle, passiert nichts (der Klick am
    /// Ende eines Handle-Drags darf den Editor nicht schließen). Gibt zurück, ob
    /// tatsächlich deaktiviert wurde.
    pub fn deactivate(&mut self, host: &mut dyn DiagramHost, click: Option<ClickTarget>) -> bool {
        if let Some(ClickTarget::Visual(visual)) = click {
            if host.visual_has_class(visual, HANDLE_CLASS) {
                log::debug!("Klick auf Handle {} ignoriert", visual);
                return false;
            }
        }

        for visual in self.visuals() {
            host.set_visual_visible(visual, false);
        }
        host.remove_connection_class(self.connection, CONNECTION_EDIT_CLASS);

        if self.settings.mode == EditMode::Dual {
            self.restore_face_selectors(host);
        }
        self.faces = [None; 2];
        self.listening = false;
        if self.active {
            log::info!("Editor für Verbindung {} deaktiviert", self.connection);
        }
        self.active = false;
        true
    }

    /// Verwirft die editierte Geometrie (Connector fällt auf Defaults zurück) und deaktiviert.
    pub fn reset(&mut self, host: &mut dyn DiagramHost) {
        host.set_connector_geometry(self.connection, None);
        host.repaint_connection(self.connection);
        self.deactivate(host, None);
        self.refresh_connector_info(host);
        log::info!("Geometrie von Verbindung {} zurückgesetzt", self.connection);
    }

    /// Liest Geometrie und Endpunkte neu und führt Handles und Guidelines nach,
    /// ohne den Aktivierungszustand zu ändern.
    pub fn update(&mut self, host: &mut dyn DiagramHost) {
        self.refresh_connector_info(host);
        self.update_handle_positions(host);
        self.update_guidelines(host);
    }

    /// Baut die Sitzung ab: deaktiviert und entfernt alle Overlays.
    pub fn dispose(&mut self, host: &mut dyn DiagramHost) {
        self.deactivate(host, None);
        for visual in self.visuals() {
            host.remove_visual(visual);
        }
        log::debug!("Editor für Verbindung {} entfernt", self.connection);
    }

    // ── Nachführen ──────────────────────────────────────────────

    /// Liest Endpunkte, Origin und Steuerpunkte neu; im aktiven Dual-Modus auch
    /// die Seitenmittelpunkte beider Endpunkt-Elemente.
    pub(crate) fn refresh_connector_info(&mut self, host: &dyn DiagramHost) {
        self.frame = EndpointFrame::read(host, self.connection);
        self.points = read_control_points(host, self.connection);
        if self.active && self.settings.mode == EditMode::Dual {
            let [source, target] = self.elements;
            let source_bounds = host.element_bounds(source).unwrap_or_default();
            let target_bounds = host.element_bounds(target).unwrap_or_default();
            self.midpoints = Some([
                FaceMidpoints::from_bounds(&source_bounds),
                FaceMidpoints::from_bounds(&target_bounds),
            ]);
        }
    }

    /// Positioniert die Handles als reine Funktion von Steuerpunkten und Origin.
    pub(crate) fn update_handle_positions(&mut self, host: &mut dyn DiagramHost) {
        let origin = self.frame.origin;
        let (cp1, cp2) = self.points.to_absolute(origin);
        match self.settings.mode {
            EditMode::Dual => {
                host.set_visual_position(self.handles.main, origin + self.points.midpoint());
                host.set_visual_position(self.handles.source_marker, cp1);
                host.set_visual_position(self.handles.target_marker, cp2);
                self.update_faces(host);
            }
            EditMode::Single => {
                host.set_visual_position(self.handles.main, cp1);
                let second = if self.kind.lock_handles() { cp1 } else { cp2 };
                host.set_visual_position(self.handles.second, second);
            }
        }
    }

    /// Zeichnet beide Guidelines aus den aktuellen Steuerpunkten neu.
    pub(crate) fn update_guidelines(&self, host: &mut dyn DiagramHost) {
        let min_extent = self.settings.guideline_min_extent;
        let (cp1, cp2) = self.points.to_absolute(self.frame.origin);
        let locked = self.kind.lock_handles();

        update_guideline(
            host,
            self.guidelines[0],
            self.handles.second,
            self.frame.target,
            cp1,
            min_extent,
        );
        let (handle, position) = if locked {
            (self.handles.second, cp1)
        } else {
            (self.handles.main, cp2)
        };
        update_guideline(
            host,
            self.guidelines[1],
            handle,
            self.frame.source,
            position,
            min_extent,
        );
    }

    /// Bestimmt die nächstgelegenen Seiten und pinnt kontinuierliche Anker darauf.
    ///
    /// Die Quellseite richtet sich nach Steuerpunkt 2, die Zielseite nach Steuerpunkt 1.
    pub(crate) fn update_faces(&mut self, host: &mut dyn DiagramHost) {
        if !self.active {
            return;
        }
        let Some([source_mids, target_mids]) = self.midpoints else {
            return;
        };
        let (cp1, cp2) = self.points.to_absolute(self.frame.origin);
        self.faces = [Some(source_mids.nearest(cp2)), Some(target_mids.nearest(cp1))];

        for side in EndpointSide::BOTH {
            let Some(face) = self.faces[side.index()] else {
                continue;
            };
            if host.anchor_is_continuous(self.connection, side) {
                host.set_face_selector(self.connection, side, FaceSelector::Pinned(face));
            }
        }
    }

    /// Schreibt die Steuerpunkte als Geometrie und fordert Repaints der Endpunkt-Elemente an.
    pub(crate) fn push_geometry(&self, host: &mut dyn DiagramHost) {
        host.set_connector_geometry(self.connection, Some(self.points.to_geometry()));
        let [source, target] = self.elements;
        host.repaint_element(source);
        if target != source {
            host.repaint_element(target);
        }
    }

    fn save_face_selectors(&mut self, host: &dyn DiagramHost) {
        for side in EndpointSide::BOTH {
            let slot = &mut self.saved_selectors[side.index()];
            if slot.is_none() && host.anchor_is_continuous(self.connection, side) {
                *slot = Some(host.face_selector(self.connection, side));
            }
        }
    }

    fn restore_face_selectors(&mut self, host: &mut dyn DiagramHost) {
        for side in EndpointSide::BOTH {
            if let Some(selector) = self.saved_selectors[side.index()].take() {
                host.set_face_selector(self.connection, side, selector);
            }
        }
    }
}
