//! Use-Cases: Anker anhängen, verschieben und löschen; Handles ziehen.

use super::edit_layer_path;
use crate::app::AppState;
use crate::core::{AnchorRef, HandleKind, Vector2};

/// Hängt einen Anker an den Pfad des aktuellen Layers an.
///
/// Der Vorgänger bekommt ein out-Handle bei 1/3, der neue Anker ein
/// in-Handle bei 2/3 der Verbindungsstrecke.
pub fn add_anchor(state: &mut AppState, pos: Vector2) {
    let Some(layer) = state.current_layer().map(|l| l.id) else {
        log::warn!("Kein aktueller Layer für neuen Anker");
        return;
    };
    match edit_layer_path(state, layer, |path| Ok(path.add_anchor(pos))) {
        Ok(index) => log::debug!("Anker {} in Layer {} bei {:?} angelegt", index, layer, pos),
        Err(e) => log::warn!("Anker nicht angelegt: {}", e),
    }
}

/// Verschiebt einen Anker samt eigener und angrenzender Handles.
pub fn move_anchor(state: &mut AppState, anchor: AnchorRef, delta: Vector2) {
    if let Err(e) = edit_layer_path(state, anchor.layer, |path| {
        path.move_anchor(anchor.index, delta)
    }) {
        log::warn!("Anker-Verschiebung ignoriert: {}", e);
    }
}

/// Setzt ein Handle auf eine absolute Position; ein bestehendes Gegenhandle wird gespiegelt.
pub fn move_handle(state: &mut AppState, anchor: AnchorRef, kind: HandleKind, pos: Vector2) {
    if let Err(e) = edit_layer_path(state, anchor.layer, |path| {
        path.move_handle(anchor.index, kind, pos)
    }) {
        log::warn!("Handle-Verschiebung ignoriert: {}", e);
    }
}

/// Löscht den selektierten Anker und verwirft Selektion und Drag-Ziel.
///
/// Marker, die auf diesen oder spätere Indizes zeigen, werden nicht
/// nachgeführt und können danach ins Leere zeigen.
pub fn remove_selected_anchor(state: &mut AppState) {
    let Some(anchor) = state.editor.selected_anchor.take() else {
        return;
    };
    state.editor.hit = None;
    state.editor.hovered_anchor = None;

    match edit_layer_path(state, anchor.layer, |path| path.remove_anchor(anchor.index)) {
        Ok(_) => log::info!("Anker {} aus Layer {} gelöscht", anchor.index, anchor.layer),
        Err(e) => log::warn!("Anker nicht gelöscht: {}", e),
    }
}
