//! Fehlertypen der Editor-Registry.

use crate::host::ConnectionId;

/// Fehler beim Anfordern eines Editors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// Für den Connector-Typ der Verbindung ist kein Editor registriert.
    #[error("Kein Editor für Connector-Typ [{0}] registriert")]
    UnsupportedConnectorType(String),
    /// Die Verbindung ist dem Host nicht bekannt.
    #[error("Verbindung {0} unbekannt")]
    UnknownConnection(ConnectionId),
}
