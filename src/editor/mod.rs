//! Editor-Zustandsmaschine für Bézier-Connectoren.
//!
//! **Single:** ein Handle pro Steuerpunkt, bei gekoppelten Handles (State-Machine)
//! bewegt ein Handle beide Steuerpunkte gemeinsam.
//! **Dual:** zentrales Drag-Handle, beide Steuerpunkte auf der Lot-Strecke durch das
//! Zentrum der Endpunkte; zwei Marker zeigen die aufgelösten Steuerpunkte.
//!
//! Zustände: konstruiert → aktiviert ⇄ deaktiviert → entfernt.

mod drag;
pub mod guideline;
pub mod handle;
mod lifecycle;
mod session;

pub use drag::dual_control_points;
pub use guideline::{GuidelineGeometry, GUIDELINE_CLASS};
pub use handle::{HandleRole, HandleSet, HANDLE_CLASS};
pub use lifecycle::CONNECTION_EDIT_CLASS;
pub use session::{EditorSession, EndpointFrame, SessionSettings};
