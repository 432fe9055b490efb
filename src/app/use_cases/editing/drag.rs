//! Use-Cases: Drag-Lebenszyklus im Bezier-Modus.

use super::edit_layer_path;
use crate::app::state::{HitKind, HitTarget};
use crate::app::AppState;
use crate::core::{AnchorRef, HandleKind, LayerId, Vector2};

/// Selektiert einen Anker und merkt ihn als Drag-Ziel.
pub fn begin_anchor_drag(state: &mut AppState, anchor: AnchorRef) {
    state.editor.selected_anchor = Some(anchor);
    state.editor.hit = Some(HitTarget {
        anchor,
        kind: HitKind::Anchor,
    });
}

/// Merkt ein Handle als Drag-Ziel (Selektion bleibt unverändert).
pub fn begin_handle_drag(state: &mut AppState, anchor: AnchorRef, kind: HandleKind) {
    state.editor.hit = Some(HitTarget {
        anchor,
        kind: HitKind::Handle(kind),
    });
}

/// Aktiviert das Verschieben des ganzen Pfads ab Zeigerposition `pos`.
pub fn arm_whole_path_drag(state: &mut AppState, pos: Vector2) {
    if state.editor.hit.is_none() {
        return;
    }
    state.editor.drag_whole = true;
    state.editor.last_drag_point = Some(pos);
    log::debug!("Ganz-Pfad-Drag aktiviert bei {:?}", pos);
}

/// Verschiebt alle Anker und Handles eines Pfads und aktualisiert den Bezugspunkt.
pub fn translate_path(state: &mut AppState, layer: LayerId, delta: Vector2, pos: Vector2) {
    match edit_layer_path(state, layer, |path| {
        path.translate(delta);
        Ok(())
    }) {
        Ok(()) => state.editor.last_drag_point = Some(pos),
        Err(e) => log::warn!("Pfad-Verschiebung ignoriert: {}", e),
    }
}

/// Setzt den Drag-Zustand nach dem Loslassen zurück.
pub fn end_drag(state: &mut AppState) {
    state.editor.end_drag();
}
