//! Use-Case-Funktionen für Pfad- und Marker-Bearbeitung.
//!
//! Aufgeteilt nach Operation:
//! - `anchors`: Anker anhängen, verschieben, löschen; Handles ziehen
//! - `drag`: Drag-Lebenszyklus inkl. Ganz-Pfad-Verschiebung
//! - `markers`: Radius-Marker anlegen, selektieren, skalieren

mod anchors;
mod drag;
mod markers;

pub use anchors::{add_anchor, move_anchor, move_handle, remove_selected_anchor};
pub use drag::{arm_whole_path_drag, begin_anchor_drag, begin_handle_drag, end_drag, translate_path};
pub use markers::{clear_marker_selection, create_marker, select_marker, set_marker_radius};

use crate::app::AppState;
use crate::core::{CubicPath, EditError, EditResult, LayerId, LayerStore};

/// Wendet `edit` auf den Pfad des Layers `layer` an und ersetzt die Layer-Folge.
///
/// Der Store wird nur bei Erfolg ersetzt; bei Fehler bleibt der Zustand unverändert.
pub(crate) fn edit_layer_path<T>(
    state: &mut AppState,
    layer: LayerId,
    edit: impl FnOnce(&mut CubicPath) -> EditResult<T>,
) -> EditResult<T> {
    let (index, _) = state
        .layers
        .find_layer(layer)
        .ok_or(EditError::UnknownLayer { id: layer })?;
    let mut layers = state.layers.layers().to_vec();
    let result = edit(&mut layers[index].path)?;
    let current = state.layers.current_layer_index();
    state.layers.replace_layers(layers, current);
    Ok(result)
}
