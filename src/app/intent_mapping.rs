//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Alle Treffer-Tests laufen hier gegen den read-only State; die Commands
//! tragen bereits das aufgelöste Ziel (Anker-Referenz, Marker-Index).

use super::input::EditorKey;
use super::state::{EditorMode, HitKind};
use super::{AppCommand, AppIntent, AppState};
use crate::core::{clamp_to_canvas, AnchorRef, Layer, LayerStore, Vector2};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => match state.editor.mode {
            EditorMode::Bezier => bezier_press(state, pos),
            EditorMode::Circle => circle_press(state, pos),
            // Translate ist ein anerkannter Modus ohne Wirkung
            EditorMode::Translate | EditorMode::Preview => vec![],
        },
        AppIntent::PointerDragged { pos, previous } => match state.editor.mode {
            EditorMode::Bezier => bezier_drag(state, pos, previous),
            EditorMode::Circle => circle_drag(state, pos),
            EditorMode::Translate | EditorMode::Preview => vec![],
        },
        AppIntent::PointerReleased => vec![AppCommand::EndDrag],
        AppIntent::PointerMoved { pos } => {
            let anchor = find_visible_anchor(
                state.layers.layers(),
                pos,
                state.options.anchor_hit_radius,
            );
            if anchor == state.editor.hovered_anchor {
                vec![]
            } else {
                vec![AppCommand::SetHoveredAnchor { anchor }]
            }
        }
        AppIntent::KeyPressed { key, pointer } => map_key(state, key, pointer),
        AppIntent::CanvasResized { size } => vec![AppCommand::SetCanvasSize { size }],
        AppIntent::FrameTick => {
            if state.animation.is_playing {
                vec![AppCommand::AdvanceFrame]
            } else {
                vec![]
            }
        }
        AppIntent::SetModeRequested { mode } => vec![AppCommand::SetEditorMode { mode }],
        AppIntent::TogglePlayRequested => vec![AppCommand::TogglePlayback],
        AppIntent::SetAnimationSpeedRequested { seconds } => vec![AppCommand::SetAnimationSpeed {
            seconds: state.options.snap_animation_speed(seconds),
        }],
        AppIntent::SetAnimationKindRequested { kind } => {
            vec![AppCommand::SetAnimationKind { kind }]
        }
        AppIntent::AddLayerRequested => vec![AppCommand::AddLayer],
        AppIntent::RemoveLayerRequested { index } => vec![AppCommand::RemoveLayer { index }],
        AppIntent::SelectLayerRequested { index } => vec![AppCommand::SelectLayer { index }],
        AppIntent::ToggleLayerVisibilityRequested { index } => {
            vec![AppCommand::ToggleLayerVisibility { index }]
        }
        AppIntent::RenameLayerRequested { index, name } => {
            vec![AppCommand::RenameLayer { index, name }]
        }
        AppIntent::MoveLayerRequested { from, to } => vec![AppCommand::MoveLayer { from, to }],
        AppIntent::UpdateLayerPathRequested { index, path } => {
            vec![AppCommand::UpdateLayerPath { index, path }]
        }
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
    }
}

/// Erster Anker (Layer-Reihenfolge, dann Anker-Reihenfolge) sichtbarer Layer im Radius.
pub(crate) fn find_visible_anchor(
    layers: &[Layer],
    pos: Vector2,
    radius: f32,
) -> Option<AnchorRef> {
    find_anchor(layers.iter().filter(|l| l.is_visible), pos, radius)
}

/// Erster Anker aller Layer im Radius, unabhängig von der Sichtbarkeit.
fn find_anchor<'a>(
    layers: impl IntoIterator<Item = &'a Layer>,
    pos: Vector2,
    radius: f32,
) -> Option<AnchorRef> {
    layers.into_iter().find_map(|l| {
        l.path
            .hit_test_anchor(pos, radius)
            .map(|i| AnchorRef::new(l.id, i))
    })
}

fn bezier_press(state: &AppState, pos: Vector2) -> Vec<AppCommand> {
    if !state.view.contains(pos) {
        return vec![];
    }
    let Some(layer) = state.current_layer() else {
        return vec![];
    };
    let opts = &state.options;

    if let Some(index) = layer.path.hit_test_anchor(pos, opts.anchor_hit_radius) {
        return vec![AppCommand::BeginAnchorDrag {
            anchor: AnchorRef::new(layer.id, index),
        }];
    }
    if let Some((index, kind)) = layer.path.hit_test_handle(pos, opts.handle_hit_radius) {
        return vec![AppCommand::BeginHandleDrag {
            anchor: AnchorRef::new(layer.id, index),
            kind,
        }];
    }
    vec![AppCommand::AddAnchor { pos }]
}

fn bezier_drag(state: &AppState, pos: Vector2, previous: Vector2) -> Vec<AppCommand> {
    let Some(hit) = state.editor.hit else {
        return vec![];
    };

    if state.editor.drag_whole {
        let last = state.editor.last_drag_point.unwrap_or(previous);
        return vec![AppCommand::TranslatePath {
            layer: hit.anchor.layer,
            delta: pos - last,
            pos,
        }];
    }

    let clamped = clamp_to_canvas(pos, state.view.canvas_size);
    match hit.kind {
        HitKind::Anchor => vec![AppCommand::MoveAnchor {
            anchor: hit.anchor,
            delta: clamped - clamp_to_canvas(previous, state.view.canvas_size),
        }],
        HitKind::Handle(kind) => vec![AppCommand::MoveHandle {
            anchor: hit.anchor,
            kind,
            pos: clamped,
        }],
    }
}

fn circle_press(state: &AppState, pos: Vector2) -> Vec<AppCommand> {
    let layers = state.layers.layers();
    let spec = state.options.marker_handle_spec();

    if let Some(index) = state.markers.hit_control_point(pos, layers, &spec) {
        return vec![AppCommand::SelectMarker {
            index,
            drag_control_point: true,
        }];
    }
    if let Some(index) = state.markers.hit_body(pos, layers) {
        return vec![AppCommand::SelectMarker {
            index,
            drag_control_point: false,
        }];
    }
    match find_anchor(layers, pos, state.options.marker_anchor_hit_radius) {
        Some(anchor) => vec![AppCommand::CreateMarker { anchor }],
        None => vec![AppCommand::ClearMarkerSelection],
    }
}

fn circle_drag(state: &AppState, pos: Vector2) -> Vec<AppCommand> {
    match state.editor.selected_marker {
        Some(index) if state.editor.dragging_control_point => {
            vec![AppCommand::SetMarkerRadiusFromPointer { index, pos }]
        }
        _ => vec![],
    }
}

fn map_key(state: &AppState, key: EditorKey, pointer: Option<Vector2>) -> Vec<AppCommand> {
    match key {
        EditorKey::Space => match (state.editor.hit, pointer) {
            (Some(_), Some(pos)) => vec![AppCommand::ArmWholePathDrag { pos }],
            (Some(_), None) => vec![],
            (None, _) => vec![AppCommand::TogglePlayback],
        },
        EditorKey::Char(c) => EditorMode::from_shortcut(c)
            .map(|mode| vec![AppCommand::SetEditorMode { mode }])
            .unwrap_or_default(),
        EditorKey::Backspace => {
            if state.editor.mode == EditorMode::Bezier && state.editor.selected_anchor.is_some() {
                vec![AppCommand::RemoveSelectedAnchor]
            } else {
                vec![]
            }
        }
        EditorKey::Enter => {
            if state.editor.mode == EditorMode::Bezier && state.current_anchor_count() >= 2 {
                vec![AppCommand::AddLayer]
            } else {
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests;
