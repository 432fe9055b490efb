//! Handler für Layer-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CubicPath;

/// Legt einen neuen Layer an (auch Enter im Bezier-Modus).
pub fn add(state: &mut AppState) {
    use_cases::layers::add_layer(state);
}

/// Entfernt einen Layer.
pub fn remove(state: &mut AppState, index: usize) {
    use_cases::layers::remove_layer(state, index);
}

/// Wechselt den aktuellen Layer.
pub fn select(state: &mut AppState, index: usize) {
    use_cases::layers::select_layer(state, index);
}

/// Schaltet die Sichtbarkeit um.
pub fn toggle_visibility(state: &mut AppState, index: usize) {
    use_cases::layers::toggle_layer_visibility(state, index);
}

/// Benennt einen Layer um.
pub fn rename(state: &mut AppState, index: usize, name: &str) {
    use_cases::layers::rename_layer(state, index, name);
}

/// Verschiebt einen Layer.
pub fn reorder(state: &mut AppState, from: usize, to: usize) {
    use_cases::layers::move_layer(state, from, to);
}

/// Ersetzt den Pfad eines Layers.
pub fn update_path(state: &mut AppState, index: usize, path: CubicPath) {
    use_cases::layers::update_layer_path(state, index, path);
}
