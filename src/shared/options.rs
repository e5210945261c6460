//! Zentrale Konfiguration für den Bézier-Connector-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::EditMode;
use serde::{Deserialize, Serialize};

// ── Sitzungsverhalten ───────────────────────────────────────────────

/// Klick außerhalb der Handles schließt den Editor.
pub const CLOSE_ON_MOUSE_UP: bool = true;
/// Verschieben eines Endpunkt-Elements verwirft die editierte Geometrie.
pub const CLEAR_ON_DRAG: bool = true;

// ── Geometrie ───────────────────────────────────────────────────────

/// Minimale Breite/Höhe einer Guideline (Layout-Einheiten).
pub const GUIDELINE_MIN_EXTENT: f32 = 5.0;
/// Halbe Länge der Dual-Lot-Strecke als Vielfaches des Drag-Radius.
pub const DUAL_RADIUS_FACTOR: f32 = 1.5;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_connector_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    /// Modus, wenn eine Editier-Anfrage keinen angibt
    #[serde(default)]
    pub default_mode: EditMode,
    /// Klick außerhalb der Handles deaktiviert den Editor
    #[serde(default = "default_close_on_mouse_up")]
    pub close_on_mouse_up: bool,
    /// Endpunkt-Drag verwirft die Geometrie (sonst wird nachgeführt)
    #[serde(default = "default_clear_on_drag")]
    pub clear_on_drag: bool,
    /// Minimale Guideline-Ausdehnung
    #[serde(default = "default_guideline_min_extent")]
    pub guideline_min_extent: f32,
    /// Faktor für die halbe Länge der Dual-Lot-Strecke
    #[serde(default = "default_dual_radius_factor")]
    pub dual_radius_factor: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_mode: EditMode::Single,
            close_on_mouse_up: CLOSE_ON_MOUSE_UP,
            clear_on_drag: CLEAR_ON_DRAG,
            guideline_min_extent: GUIDELINE_MIN_EXTENT,
            dual_radius_factor: DUAL_RADIUS_FACTOR,
        }
    }
}

fn default_close_on_mouse_up() -> bool {
    CLOSE_ON_MOUSE_UP
}

fn default_clear_on_drag() -> bool {
    CLEAR_ON_DRAG
}

fn default_guideline_min_extent() -> f32 {
    GUIDELINE_MIN_EXTENT
}

fn default_dual_radius_factor() -> f32 {
    DUAL_RADIUS_FACTOR
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_connector_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_connector_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let opts: EditorOptions = toml::from_str("default_mode = \"dual\"\nclear_on_drag = false\n")
            .expect("TOML sollte parsen");
        assert_eq!(opts.default_mode, EditMode::Dual);
        assert!(!opts.clear_on_drag);
        assert!(opts.close_on_mouse_up);
        assert_eq!(opts.guideline_min_extent, GUIDELINE_MIN_EXTENT);
        assert_eq!(opts.dual_radius_factor, DUAL_RADIUS_FACTOR);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let path = std::env::temp_dir().join("bezier_connector_editor_does_not_exist.toml");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }
}
