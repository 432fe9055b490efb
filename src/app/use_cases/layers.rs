//! Use-Cases für Layer-Operationen.
//!
//! Jede Operation erzeugt eine vollständige neue Layer-Folge plus neuen
//! aktuellen Index und übergibt beides über `replace_layers` an den Store.
//! Ungültige Indizes und Namenskollisionen werden gewarnt und ignoriert.

use crate::app::AppState;
use crate::core::{
    next_layer_id, unique_layer_name, CubicPath, EditError, EditResult, Layer, LayerStore,
};

/// Legt einen leeren, sichtbaren Layer mit eindeutigem Namen an und aktiviert ihn.
pub fn add_layer(state: &mut AppState) {
    let mut layers = state.layers.layers().to_vec();
    let layer = Layer::new(next_layer_id(&layers), unique_layer_name(&layers));
    log::info!("Layer '{}' ({}) angelegt", layer.name, layer.id);
    layers.push(layer);
    let index = layers.len() - 1;
    state.layers.replace_layers(layers, index);
    state.editor.clear_interaction();
}

/// Entfernt einen Layer samt seiner Marker.
///
/// Der letzte verbleibende Layer bleibt bestehen (No-op). Der aktuelle Index
/// rückt nach, wenn ein Layer davor entfernt wird, und wird begrenzt, wenn
/// der aktuelle Layer selbst entfernt wird.
pub fn remove_layer(state: &mut AppState, index: usize) {
    let len = state.layers.len();
    if len <= 1 {
        log::info!("Letzter Layer kann nicht entfernt werden");
        return;
    }
    if let Err(e) = EditError::check_index(index, len) {
        log::warn!("Layer nicht entfernt: {}", e);
        return;
    }

    let current = state.layers.current_layer_index();
    let mut layers = state.layers.layers().to_vec();
    let removed = layers.remove(index);
    let new_index = if index < current {
        current - 1
    } else if index == current {
        current.min(layers.len() - 1)
    } else {
        current
    };
    state.layers.replace_layers(layers, new_index);

    let dropped = state.markers.remove_layer(removed.id);
    if dropped > 0 {
        state.editor.selected_marker = None;
        state.editor.dragging_control_point = false;
    }
    state.editor.clear_interaction();
    log::info!(
        "Layer '{}' ({}) entfernt, {} Marker verworfen",
        removed.name,
        removed.id,
        dropped
    );
}

/// Macht einen Layer zum aktuellen Bearbeitungsziel.
pub fn select_layer(state: &mut AppState, index: usize) {
    if let Err(e) = EditError::check_index(index, state.layers.len()) {
        log::warn!("Layer-Wechsel ignoriert: {}", e);
        return;
    }
    let layers = state.layers.layers().to_vec();
    state.layers.replace_layers(layers, index);
    state.editor.clear_interaction();
    log::info!("Aktueller Layer: {}", index);
}

/// Schaltet die Sichtbarkeit eines Layers um.
pub fn toggle_layer_visibility(state: &mut AppState, index: usize) {
    if let Err(e) = EditError::check_index(index, state.layers.len()) {
        log::warn!("Sichtbarkeit unverändert: {}", e);
        return;
    }
    let mut layers = state.layers.layers().to_vec();
    layers[index].is_visible = !layers[index].is_visible;
    log::info!(
        "Layer '{}' {}",
        layers[index].name,
        if layers[index].is_visible {
            "eingeblendet"
        } else {
            "ausgeblendet"
        }
    );
    let current = state.layers.current_layer_index();
    state.layers.replace_layers(layers, current);
}

fn try_rename(state: &mut AppState, index: usize, name: &str) -> EditResult<()> {
    EditError::check_index(index, state.layers.len())?;
    let taken = state
        .layers
        .layers()
        .iter()
        .enumerate()
        .any(|(i, l)| i != index && l.name == name);
    if taken {
        return Err(EditError::DuplicateName {
            name: name.to_string(),
        });
    }
    let mut layers = state.layers.layers().to_vec();
    layers[index].name = name.to_string();
    let current = state.layers.current_layer_index();
    state.layers.replace_layers(layers, current);
    Ok(())
}

/// Benennt einen Layer um; bei Namenskollision bleibt der alte Name erhalten.
pub fn rename_layer(state: &mut AppState, index: usize, name: &str) {
    match try_rename(state, index, name) {
        Ok(()) => log::info!("Layer {} umbenannt in '{}'", index, name),
        Err(e) => log::warn!("Umbenennung abgelehnt: {}", e),
    }
}

/// Ersetzt den Pfad eines Layers.
pub fn update_layer_path(state: &mut AppState, index: usize, path: CubicPath) {
    if let Err(e) = EditError::check_index(index, state.layers.len()) {
        log::warn!("Pfad nicht ersetzt: {}", e);
        return;
    }
    let mut layers = state.layers.layers().to_vec();
    layers[index].path = path;
    let current = state.layers.current_layer_index();
    state.layers.replace_layers(layers, current);
}

/// Verschiebt einen Layer von `from` nach `to`; der aktuelle Layer bleibt aktuell.
pub fn move_layer(state: &mut AppState, from: usize, to: usize) {
    let len = state.layers.len();
    if let Err(e) =
        EditError::check_index(from, len).and_then(|()| EditError::check_index(to, len))
    {
        log::warn!("Layer nicht verschoben: {}", e);
        return;
    }
    if from == to {
        return;
    }

    let current = state.layers.current_layer_index();
    let mut layers = state.layers.layers().to_vec();
    let moved = layers.remove(from);
    layers.insert(to, moved);

    let new_current = if current == from {
        to
    } else if current > from && current <= to {
        current - 1
    } else if current >= to && current < from {
        current + 1
    } else {
        current
    };
    state.layers.replace_layers(layers, new_current);
    log::info!("Layer {} nach {} verschoben", from, to);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnchorRef, LayerId, RadiusMarker, Vector2};

    fn state_with_layers(n: usize) -> AppState {
        let mut state = AppState::new();
        for _ in 1..n {
            add_layer(&mut state);
        }
        state
    }

    fn names(state: &AppState) -> Vec<String> {
        state.layers.layers().iter().map(|l| l.name.clone()).collect()
    }

    #[test]
    fn add_layer_uses_unique_name_and_becomes_current() {
        let mut state = AppState::new();
        add_layer(&mut state);
        assert_eq!(names(&state), vec!["Layer 0", "Layer 1"]);
        assert_eq!(state.layers.current_layer_index(), 1);
        assert_eq!(state.layers.layers()[1].id, LayerId(1));
    }

    #[test]
    fn removing_last_layer_is_a_noop() {
        let mut state = AppState::new();
        remove_layer(&mut state, 0);
        assert_eq!(state.layers.len(), 1);
        assert_eq!(names(&state), vec!["Layer 0"]);
    }

    #[test]
    fn remove_layer_keeps_current_index_consistent() {
        let mut state = state_with_layers(4);
        select_layer(&mut state, 2);

        remove_layer(&mut state, 0);
        assert_eq!(state.layers.current_layer_index(), 1);
        assert_eq!(state.current_layer().map(|l| l.name.as_str()), Some("Layer 2"));

        remove_layer(&mut state, 2);
        assert_eq!(state.layers.current_layer_index(), 1);

        remove_layer(&mut state, 1);
        assert_eq!(state.layers.current_layer_index(), 0);
        assert_eq!(names(&state), vec!["Layer 1"]);
    }

    #[test]
    fn remove_layer_discards_its_markers() {
        let mut state = state_with_layers(2);
        state
            .markers
            .push(RadiusMarker::new(AnchorRef::new(LayerId(0), 0), 30.0));
        state
            .markers
            .push(RadiusMarker::new(AnchorRef::new(LayerId(1), 0), 30.0));
        state.editor.selected_marker = Some(1);

        remove_layer(&mut state, 1);
        assert_eq!(state.markers.len(), 1);
        assert_eq!(state.editor.selected_marker, None);
    }

    #[test]
    fn rename_rejects_duplicate_names() {
        let mut state = state_with_layers(2);
        rename_layer(&mut state, 1, "Layer 0");
        assert_eq!(names(&state), vec!["Layer 0", "Layer 1"]);

        rename_layer(&mut state, 1, "Kontur");
        assert_eq!(names(&state), vec!["Layer 0", "Kontur"]);

        // eigener Name ist keine Kollision
        rename_layer(&mut state, 1, "Kontur");
        assert_eq!(names(&state)[1], "Kontur");
    }

    #[test]
    fn invalid_indices_leave_state_unchanged() {
        let mut state = state_with_layers(2);
        toggle_layer_visibility(&mut state, 5);
        select_layer(&mut state, 5);
        rename_layer(&mut state, 5, "X");
        move_layer(&mut state, 0, 5);
        update_layer_path(&mut state, 9, CubicPath::new());
        remove_layer(&mut state, 7);
        assert_eq!(names(&state), vec!["Layer 0", "Layer 1"]);
        assert_eq!(state.layers.current_layer_index(), 1);
        assert!(state.layers.layers().iter().all(|l| l.is_visible));
    }

    #[test]
    fn move_layer_tracks_current_layer() {
        let mut state = state_with_layers(4);
        select_layer(&mut state, 1);

        move_layer(&mut state, 1, 3);
        assert_eq!(names(&state), vec!["Layer 0", "Layer 2", "Layer 3", "Layer 1"]);
        assert_eq!(state.layers.current_layer_index(), 3);

        move_layer(&mut state, 0, 2);
        assert_eq!(state.layers.current_layer_index(), 3);

        move_layer(&mut state, 3, 0);
        assert_eq!(state.layers.current_layer_index(), 0);
        assert_eq!(state.current_layer().map(|l| l.name.as_str()), Some("Layer 1"));
    }

    #[test]
    fn toggle_and_update_path_apply_to_target_only() {
        let mut state = state_with_layers(2);
        toggle_layer_visibility(&mut state, 0);
        assert!(!state.layers.layers()[0].is_visible);
        assert!(state.layers.layers()[1].is_visible);

        let path = CubicPath::from_points(&[Vector2::ZERO, Vector2::new(10.0, 0.0)]);
        update_layer_path(&mut state, 0, path.clone());
        assert_eq!(state.layers.layers()[0].path, path);
        assert!(state.layers.layers()[1].path.is_empty());
    }
}
