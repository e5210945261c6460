//! Geteilte Konfiguration für Editor und Controller.

pub mod options;

pub use options::EditorOptions;
pub use options::{DUAL_RADIUS_FACTOR, GUIDELINE_MIN_EXTENT};
