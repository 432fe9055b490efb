//! Use-Cases für Radius-Marker.

use crate::app::AppState;
use crate::core::{AnchorRef, LayerStore, RadiusMarker, Vector2};

/// Legt einen Marker mit Standardradius am Anker an und selektiert ihn.
pub fn create_marker(state: &mut AppState, anchor: AnchorRef) {
    if let Err(e) = anchor.resolve(state.layers.layers()) {
        log::warn!("Marker nicht angelegt: {}", e);
        return;
    }
    let radius = state.options.default_marker_radius;
    let index = state.markers.push(RadiusMarker::new(anchor, radius));
    state.editor.selected_marker = Some(index);
    state.editor.dragging_control_point = false;
    log::info!(
        "Marker {} an Anker {} von Layer {} angelegt (r = {})",
        index,
        anchor.index,
        anchor.layer,
        radius
    );
}

/// Selektiert einen Marker; optional beginnt der Kontrollpunkt-Drag.
pub fn select_marker(state: &mut AppState, index: usize, drag_control_point: bool) {
    if index >= state.markers.len() {
        log::warn!(
            "Marker {} existiert nicht ({} Marker vorhanden)",
            index,
            state.markers.len()
        );
        return;
    }
    state.editor.selected_marker = Some(index);
    state.editor.dragging_control_point = drag_control_point;
}

/// Hebt die Marker-Selektion auf.
pub fn clear_marker_selection(state: &mut AppState) {
    state.editor.selected_marker = None;
    state.editor.dragging_control_point = false;
}

/// Setzt den Radius aus der Zeigerposition relativ zum Marker-Mittelpunkt.
pub fn set_marker_radius(state: &mut AppState, index: usize, pos: Vector2) {
    let spec = state.options.marker_handle_spec();
    let layers = state.layers.layers();
    let Some(marker) = state.markers.get_mut(index) else {
        log::warn!("Marker {} existiert nicht", index);
        return;
    };
    match marker.set_radius_from_control_point(pos, layers, &spec) {
        Ok(radius) => log::debug!("Marker {}: Radius {}", index, radius),
        Err(e) => log::warn!("Marker-Radius unverändert: {}", e),
    }
}
