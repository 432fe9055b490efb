//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{AnchorRef, LayerId, LayerStore};
use crate::shared::{LayerScene, MarkerScene, RenderScene};

fn index_in_layer(anchor: Option<AnchorRef>, layer: LayerId) -> Option<usize> {
    anchor.filter(|a| a.layer == layer).map(|a| a.index)
}

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let all_layers = state.layers.layers();

    let layers = all_layers
        .iter()
        .filter(|layer| layer.is_visible)
        .map(|layer| LayerScene {
            id: layer.id,
            path: layer.path.clone(),
            radii: state.markers.radii_for_layer(layer.id, layer.path.len()),
            selected_anchor: index_in_layer(state.editor.selected_anchor, layer.id),
            hovered_anchor: index_in_layer(state.editor.hovered_anchor, layer.id),
        })
        .collect();

    // Marker mit ungültiger Referenz werden übersprungen
    let spec = state.options.marker_handle_spec();
    let markers = state
        .markers
        .iter()
        .enumerate()
        .filter_map(|(i, marker)| {
            let center = marker.center(all_layers).ok()?;
            let is_selected = state.editor.selected_marker == Some(i);
            let control_point = if is_selected {
                marker.control_point(all_layers, &spec).ok()
            } else {
                None
            };
            Some(MarkerScene {
                center,
                radius: marker.radius,
                is_selected,
                control_point,
            })
        })
        .collect();

    RenderScene {
        layers,
        markers,
        show_editing_overlays: state.editor.mode.allows_editing(),
        pulse: state.animation.pulse_frame(state.options.frames_per_second),
        canvas_size: state.view.canvas_size,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::EditorMode;
    use crate::app::AppState;
    use crate::core::{AnchorRef, CubicPath, Layer, LayerId, LayerStore, RadiusMarker, Vector2};

    fn state_with_two_layers() -> AppState {
        let mut state = AppState::new();
        let mut a = Layer::new(LayerId(0), "Layer 0");
        a.path = CubicPath::from_points(&[Vector2::ZERO, Vector2::new(50.0, 0.0)]);
        let mut b = Layer::new(LayerId(1), "Layer 1");
        b.path = CubicPath::from_points(&[Vector2::new(0.0, 50.0)]);
        b.is_visible = false;
        state.layers.replace_layers(vec![a, b], 0);
        state
    }

    #[test]
    fn hidden_layers_are_not_in_scene() {
        let state = state_with_two_layers();
        let scene = build(&state);
        assert_eq!(scene.layers.len(), 1);
        assert_eq!(scene.layers[0].id, LayerId(0));
        assert!(scene.show_editing_overlays);
    }

    #[test]
    fn selection_and_hover_map_to_owning_layer() {
        let mut state = state_with_two_layers();
        state.editor.selected_anchor = Some(AnchorRef::new(LayerId(0), 1));
        state.editor.hovered_anchor = Some(AnchorRef::new(LayerId(1), 0));
        let scene = build(&state);
        assert_eq!(scene.layers[0].selected_anchor, Some(1));
        assert_eq!(scene.layers[0].hovered_anchor, None);
    }

    #[test]
    fn markers_resolve_and_only_selected_has_control_point() {
        let mut state = state_with_two_layers();
        state
            .markers
            .push(RadiusMarker::new(AnchorRef::new(LayerId(0), 1), 30.0));
        state
            .markers
            .push(RadiusMarker::new(AnchorRef::new(LayerId(0), 9), 30.0));
        state
            .markers
            .push(RadiusMarker::new(AnchorRef::new(LayerId(0), 0), 40.0));
        state.editor.selected_marker = Some(2);

        let scene = build(&state);
        assert_eq!(scene.markers.len(), 2);
        assert_eq!(scene.markers[0].center, Vector2::new(50.0, 0.0));
        assert_eq!(scene.markers[0].control_point, None);
        assert_eq!(scene.markers[1].control_point, Some(Vector2::new(30.0, 0.0)));
        assert_eq!(scene.layers[0].radii, vec![40.0, 30.0]);
    }

    #[test]
    fn preview_mode_hides_editing_overlays() {
        let mut state = state_with_two_layers();
        state.editor.mode = EditorMode::Preview;
        assert!(!build(&state).show_editing_overlays);
    }
}
