//! Handler für Canvas, Hover und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{AnchorRef, Vector2};
use crate::shared::EditorOptions;

/// Aktualisiert die Canvas-Größe im State.
pub fn set_canvas_size(state: &mut AppState, size: Vector2) {
    use_cases::viewport::resize(state, size);
}

/// Setzt den Anker unter dem Zeiger.
pub fn set_hovered_anchor(state: &mut AppState, anchor: Option<AnchorRef>) {
    state.editor.hovered_anchor = anchor;
}

/// Speichert die Optionen neben der Binary.
pub fn save_options(state: &AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&EditorOptions::config_path())
}
