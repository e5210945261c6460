//! Editier-Modus und Editor-Varianten.

use serde::{Deserialize, Serialize};

/// Editier-Modus, fest ab Konstruktion des Editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Ein Handle pro Steuerpunkt (bzw. ein gemeinsames bei gekoppelten Handles)
    #[default]
    Single,
    /// Zentrales Drag-Handle, Steuerpunkte im festen Lot-Abstand zum Drag-Punkt
    Dual,
}

/// Editor-Variante je Connector-Typ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorKind {
    /// Freie Bézier-Kurve: jedes Handle bewegt nur seinen Steuerpunkt
    Bezier,
    /// State-Machine-Kurve: Handles gekoppelt
    StateMachine,
}

impl EditorKind {
    /// Gekoppelte Handles: ein Drag leitet beide Steuerpunkte ab.
    pub fn lock_handles(self) -> bool {
        matches!(self, EditorKind::StateMachine)
    }
}
