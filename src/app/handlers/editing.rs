//! Handler für Pfad-Editing, Radius-Marker und Bearbeitungsmodus.

use crate::app::state::EditorMode;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{AnchorRef, HandleKind, LayerId, Vector2};

/// Aktiviert einen Bearbeitungsmodus.
pub fn set_editor_mode(state: &mut AppState, mode: EditorMode) {
    if state.editor.mode != mode {
        state.editor.mode = mode;
        log::info!("Bearbeitungsmodus: {}", mode.label());
    }
}

/// Hängt einen Anker an den aktuellen Pfad an.
pub fn add_anchor(state: &mut AppState, pos: Vector2) {
    use_cases::editing::add_anchor(state, pos);
}

/// Beginnt den Drag eines Ankers.
pub fn begin_anchor_drag(state: &mut AppState, anchor: AnchorRef) {
    use_cases::editing::begin_anchor_drag(state, anchor);
}

/// Beginnt den Drag eines Handles.
pub fn begin_handle_drag(state: &mut AppState, anchor: AnchorRef, kind: HandleKind) {
    use_cases::editing::begin_handle_drag(state, anchor, kind);
}

pub fn move_anchor(state: &mut AppState, anchor: AnchorRef, delta: Vector2) {
    use_cases::editing::move_anchor(state, anchor, delta);
}

pub fn move_handle(state: &mut AppState, anchor: AnchorRef, kind: HandleKind, pos: Vector2) {
    use_cases::editing::move_handle(state, anchor, kind, pos);
}

/// Aktiviert den Ganz-Pfad-Drag.
pub fn arm_whole_path_drag(state: &mut AppState, pos: Vector2) {
    use_cases::editing::arm_whole_path_drag(state, pos);
}

/// Verschiebt den ganzen Pfad eines Layers.
pub fn translate_path(state: &mut AppState, layer: LayerId, delta: Vector2, pos: Vector2) {
    use_cases::editing::translate_path(state, layer, delta, pos);
}

/// Löscht den selektierten Anker.
pub fn remove_selected_anchor(state: &mut AppState) {
    use_cases::editing::remove_selected_anchor(state);
}

/// Beendet den laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::editing::end_drag(state);
}

/// Legt einen Marker am Anker an.
pub fn create_marker(state: &mut AppState, anchor: AnchorRef) {
    use_cases::editing::create_marker(state, anchor);
}

/// Selektiert einen Marker.
pub fn select_marker(state: &mut AppState, index: usize, drag_control_point: bool) {
    use_cases::editing::select_marker(state, index, drag_control_point);
}

/// Hebt die Marker-Selektion auf.
pub fn clear_marker_selection(state: &mut AppState) {
    use_cases::editing::clear_marker_selection(state);
}

/// Setzt einen Marker-Radius aus der Zeigerposition.
pub fn set_marker_radius(state: &mut AppState, index: usize, pos: Vector2) {
    use_cases::editing::set_marker_radius(state, index, pos);
}
