//! Use-Case: Canvas-Größe übernehmen.

use crate::app::AppState;
use crate::core::Vector2;

/// Übernimmt eine neue Canvas-Größe; Pfade, Layer und Marker bleiben unberührt.
pub fn resize(state: &mut AppState, size: Vector2) {
    if !size.is_finite() || size.x < 0.0 || size.y < 0.0 {
        log::warn!("Ungültige Canvas-Größe {:?} ignoriert", size);
        return;
    }
    if state.view.canvas_size != size {
        log::debug!("Canvas-Größe: {:?}", size);
        state.view.canvas_size = size;
    }
}
