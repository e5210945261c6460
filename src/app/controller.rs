//! Editor-Controller: verwaltet die Sitzungen und verteilt Host-Ereignisse.

use super::error::EditorError;
use super::events::EditorEvent;
use super::registry::{EditRequest, EditorRegistry};
use super::scheduler::{DeferredQueue, DeferredTask};
use crate::editor::EditorSession;
use crate::host::{ClickTarget, ConnectionId, DiagramHost, ElementId, VisualId};
use crate::shared::EditorOptions;
use glam::Vec2;
use indexmap::IndexMap;

/// Orchestriert Editor-Sitzungen (höchstens eine pro Verbindung).
#[derive(Debug, Default)]
pub struct EditorController {
    registry: EditorRegistry,
    options: EditorOptions,
    editors: IndexMap<ConnectionId, EditorSession>,
    /// Endpunkt-Element → Verbindungen, deren Editor auf Element-Drags reagiert
    subscriptions: IndexMap<ElementId, Vec<ConnectionId>>,
    deferred: DeferredQueue,
}

impl EditorController {
    /// Controller mit Standard-Registry und Standard-Optionen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn with_registry(mut self, registry: EditorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry_mut(&mut self) -> &mut EditorRegistry {
        &mut self.registry
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn editor(&self, connection: ConnectionId) -> Option<&EditorSession> {
        self.editors.get(&connection)
    }

    pub fn editor_mut(&mut self, connection: ConnectionId) -> Option<&mut EditorSession> {
        self.editors.get_mut(&connection)
    }

    pub fn editor_count(&self) -> usize {
        self.editors.len()
    }

    /// Anzahl der Aufgaben, die auf das Ende des Dispatches warten.
    pub fn pending_tasks(&self) -> usize {
        self.deferred.len()
    }

    /// Verbindungen, deren Editor auf Drags von `element` reagiert.
    pub fn subscribed_connections(&self, element: ElementId) -> &[ConnectionId] {
        self.subscriptions
            .get(&element)
            .map_or(&[], |connections| connections.as_slice())
    }

    /// Fordert das Editieren einer Verbindung an.
    ///
    /// Beim ersten Aufruf wird die Sitzung erstellt und die Endpunkt-Elemente
    /// abonniert, spätere Aufrufe aktivieren nur erneut. Die Aktivierung selbst
    /// läuft erst in [`Self::end_of_dispatch`]. Nicht editierbare Connectoren
    /// werden bei jeder Anforderung ignoriert, auch wenn schon eine Sitzung existiert.
    pub fn edit_connection(
        &mut self,
        host: &mut dyn DiagramHost,
        request: EditRequest,
    ) -> Result<(), EditorError> {
        let connection = request.connection;
        if host.connector_type(connection).is_none() {
            return Err(EditorError::UnknownConnection(connection));
        }
        if !host.is_connector_editable(connection) {
            log::warn!("Verbindung {} ist nicht editierbar, Anforderung ignoriert", connection);
            return Ok(());
        }

        if self.editors.contains_key(&connection) {
            self.deferred.push(DeferredTask::Activate(connection));
            return Ok(());
        }

        let session = self.registry.create(host, &request, &self.options)?;
        self.subscribe(connection, session.elements());
        self.editors.insert(connection, session);
        self.deferred.push(DeferredTask::Activate(connection));
        log::info!("Editor für Verbindung {} angefordert", connection);
        Ok(())
    }

    /// Verteilt ein Host-Ereignis an die betroffenen Sitzungen.
    pub fn dispatch(&mut self, host: &mut dyn DiagramHost, event: EditorEvent) {
        match event {
            EditorEvent::HandleDragged { visual, pointer } => {
                self.handle_dragged(host, visual, pointer)
            }
            EditorEvent::DocumentClicked { target } => self.document_clicked(host, target),
            EditorEvent::ElementDragStarted { element } => {
                for connection in self.subscribed_connections(element).to_vec() {
                    if let Some(editor) = self.editors.get_mut(&connection) {
                        if editor.clear_on_drag() {
                            editor.reset(host);
                        }
                    }
                }
            }
            EditorEvent::ElementDragged { element } => {
                for connection in self.subscribed_connections(element).to_vec() {
                    if let Some(editor) = self.editors.get_mut(&connection) {
                        if !editor.clear_on_drag() {
                            editor.update(host);
                        }
                    }
                }
            }
            EditorEvent::ConnectionRemoved { connection } => {
                self.remove_editor(host, connection);
            }
        }
    }

    /// Führt die verzögerten Aufgaben aus; vom Host nach jedem Dispatch aufzurufen.
    pub fn end_of_dispatch(&mut self, host: &mut dyn DiagramHost) {
        for task in self.deferred.drain() {
            match task {
                DeferredTask::Activate(connection) => {
                    if let Some(editor) = self.editors.get_mut(&connection) {
                        editor.activate(host);
                    }
                }
            }
        }
    }

    /// Baut die Sitzung einer Verbindung ab und entfernt deren Abonnements.
    pub fn remove_editor(&mut self, host: &mut dyn DiagramHost, connection: ConnectionId) {
        self.deferred.cancel(connection);
        let Some(mut editor) = self.editors.shift_remove(&connection) else {
            return;
        };
        editor.dispose(host);
        self.subscriptions.retain(|_, connections| {
            connections.retain(|c| *c != connection);
            !connections.is_empty()
        });
        log::info!("Editor für Verbindung {} abgebaut", connection);
    }

    fn handle_dragged(&mut self, host: &mut dyn DiagramHost, visual: VisualId, pointer: Vec2) {
        let Some((editor, role)) = self
            .editors
            .values_mut()
            .find_map(|editor| editor.handle_role(visual).map(|role| (editor, role)))
        else {
            log::debug!("Drag auf unbekanntem Visual {} ignoriert", visual);
            return;
        };
        editor.on_handle_drag(host, role, pointer);
    }

    fn document_clicked(&mut self, host: &mut dyn DiagramHost, target: ClickTarget) {
        for editor in self.editors.values_mut() {
            if editor.listens_for_clicks() {
                editor.deactivate(host, Some(target));
            }
        }
    }

    fn subscribe(&mut self, connection: ConnectionId, elements: [ElementId; 2]) {
        let [source, target] = elements;
        self.subscriptions.entry(source).or_default().push(connection);
        if target != source {
            self.subscriptions.entry(target).or_default().push(connection);
        }
    }
}
