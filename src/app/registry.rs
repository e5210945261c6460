//! Editor-Registry: ordnet Connector-Typen einer Editor-Art zu.

use super::error::EditorError;
use crate::core::{EditMode, EditorKind};
use crate::editor::{EditorSession, SessionSettings};
use crate::host::{ConnectionId, DiagramHost, EndpointSide};
use crate::shared::EditorOptions;
use indexmap::IndexMap;

/// Anforderung, eine Verbindung zu editieren. Nicht gesetzte Felder fallen
/// auf die [`EditorOptions`] zurück.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditRequest {
    pub connection: ConnectionId,
    pub mode: Option<EditMode>,
    pub close_on_mouse_up: Option<bool>,
    pub clear_on_drag: Option<bool>,
}

impl EditRequest {
    pub fn new(connection: ConnectionId) -> Self {
        Self {
            connection,
            mode: None,
            close_on_mouse_up: None,
            clear_on_drag: None,
        }
    }

    pub fn with_mode(mut self, mode: EditMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_close_on_mouse_up(mut self, close: bool) -> Self {
        self.close_on_mouse_up = Some(close);
        self
    }

    pub fn with_clear_on_drag(mut self, clear: bool) -> Self {
        self.clear_on_drag = Some(clear);
        self
    }

    /// Sitzungs-Einstellungen aus Anforderung und Optionen.
    pub fn settings(&self, options: &EditorOptions) -> SessionSettings {
        let mut settings = SessionSettings::from_options(options);
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(close) = self.close_on_mouse_up {
            settings.close_on_mouse_up = close;
        }
        if let Some(clear) = self.clear_on_drag {
            settings.clear_on_drag = clear;
        }
        settings
    }
}

/// Factory für Editor-Sitzungen, geschlüsselt nach Connector-Typ.
#[derive(Debug, Clone)]
pub struct EditorRegistry {
    factories: IndexMap<String, EditorKind>,
}

impl Default for EditorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl EditorRegistry {
    /// Leere Registry ohne Connector-Typen.
    pub fn empty() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Registry mit den Standard-Typen `Bezier` und `StateMachine`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("Bezier", EditorKind::Bezier);
        registry.register("StateMachine", EditorKind::StateMachine);
        registry
    }

    /// Registriert (oder ersetzt) die Editor-Art für einen Connector-Typ.
    pub fn register(&mut self, connector_type: impl Into<String>, kind: EditorKind) {
        let connector_type = connector_type.into();
        log::debug!("Editor {:?} für Connector-Typ [{}] registriert", kind, connector_type);
        self.factories.insert(connector_type, kind);
    }

    pub fn kind_for(&self, connector_type: &str) -> Option<EditorKind> {
        self.factories.get(connector_type).copied()
    }

    pub fn connector_types(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Erstellt eine Sitzung für die angeforderte Verbindung.
    ///
    /// Der Connector-Typ wird geprüft, bevor irgendein Overlay entsteht.
    pub fn create(
        &self,
        host: &mut dyn DiagramHost,
        request: &EditRequest,
        options: &EditorOptions,
    ) -> Result<EditorSession, EditorError> {
        let connection = request.connection;
        let connector_type = host
            .connector_type(connection)
            .ok_or(EditorError::UnknownConnection(connection))?;
        let kind = self
            .kind_for(&connector_type)
            .ok_or_else(|| EditorError::UnsupportedConnectorType(connector_type.clone()))?;

        let source = host
            .endpoint_element(connection, EndpointSide::Source)
            .ok_or(EditorError::UnknownConnection(connection))?;
        let target = host
            .endpoint_element(connection, EndpointSide::Target)
            .ok_or(EditorError::UnknownConnection(connection))?;

        Ok(EditorSession::new(
            host,
            connection,
            [source, target],
            kind,
            request.settings(options),
        ))
    }
}
