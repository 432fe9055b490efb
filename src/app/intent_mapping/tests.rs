use crate::app::input::EditorKey;
use crate::app::state::{EditorMode, HitKind, HitTarget};
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{
    AnchorRef, AnimationKind, CubicPath, HandleKind, Layer, LayerId, LayerStore, RadiusMarker,
    Vector2,
};

use super::map_intent_to_commands;

fn v(x: f32, y: f32) -> Vector2 {
    Vector2::new(x, y)
}

/// State mit 800×600-Canvas und Pfad (100,100) → (200,100) im aktuellen Layer.
fn state_with_path() -> AppState {
    let mut state = AppState::new();
    state.view.canvas_size = v(800.0, 600.0);
    let mut layer = Layer::new(LayerId(0), "Layer 0");
    layer.path = CubicPath::from_points(&[v(100.0, 100.0), v(200.0, 100.0)]);
    state.layers.replace_layers(vec![layer], 0);
    state
}

#[test]
fn bezier_press_on_anchor_begins_anchor_drag() {
    let state = state_with_path();

    let commands = map_intent_to_commands(&state, AppIntent::PointerPressed { pos: v(104.0, 103.0) });

    assert_eq!(
        commands,
        vec![AppCommand::BeginAnchorDrag {
            anchor: AnchorRef::new(LayerId(0), 0)
        }]
    );
}

#[test]
fn bezier_press_on_handle_begins_handle_drag() {
    let state = state_with_path();
    // out-Handle von Anker 0 liegt bei (133.3, 100)
    let commands = map_intent_to_commands(&state, AppIntent::PointerPressed { pos: v(134.0, 104.0) });

    assert_eq!(
        commands,
        vec![AppCommand::BeginHandleDrag {
            anchor: AnchorRef::new(LayerId(0), 0),
            kind: HandleKind::Out,
        }]
    );
}

#[test]
fn bezier_press_on_empty_canvas_adds_anchor_and_outside_is_ignored() {
    let state = state_with_path();

    let inside = map_intent_to_commands(&state, AppIntent::PointerPressed { pos: v(400.0, 400.0) });
    assert_eq!(inside, vec![AppCommand::AddAnchor { pos: v(400.0, 400.0) }]);

    let outside = map_intent_to_commands(&state, AppIntent::PointerPressed { pos: v(900.0, 10.0) });
    assert!(outside.is_empty());
}

#[test]
fn translate_and_preview_ignore_pointer() {
    let mut state = state_with_path();
    for mode in [EditorMode::Translate, EditorMode::Preview] {
        state.editor.mode = mode;
        assert!(map_intent_to_commands(&state, AppIntent::PointerPressed { pos: v(400.0, 400.0) })
            .is_empty());
        assert!(map_intent_to_commands(
            &state,
            AppIntent::PointerDragged {
                pos: v(401.0, 400.0),
                previous: v(400.0, 400.0)
            }
        )
        .is_empty());
    }
}

#[test]
fn anchor_drag_uses_clamped_pointer_delta() {
    let mut state = state_with_path();
    let anchor = AnchorRef::new(LayerId(0), 1);
    state.editor.hit = Some(HitTarget {
        anchor,
        kind: HitKind::Anchor,
    });

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragged {
            pos: v(810.0, 50.0),
            previous: v(795.0, 50.0),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::MoveAnchor {
            anchor,
            delta: v(5.0, 0.0)
        }]
    );
}

#[test]
fn handle_drag_targets_clamped_absolute_position() {
    let mut state = state_with_path();
    let anchor = AnchorRef::new(LayerId(0), 1);
    state.editor.hit = Some(HitTarget {
        anchor,
        kind: HitKind::Handle(HandleKind::In),
    });

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragged {
            pos: v(-20.0, 700.0),
            previous: v(0.0, 590.0),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::MoveHandle {
            anchor,
            kind: HandleKind::In,
            pos: v(0.0, 600.0)
        }]
    );
}

#[test]
fn whole_path_drag_translates_by_delta_from_last_drag_point() {
    let mut state = state_with_path();
    state.editor.hit = Some(HitTarget {
        anchor: AnchorRef::new(LayerId(0), 0),
        kind: HitKind::Anchor,
    });
    state.editor.drag_whole = true;
    state.editor.last_drag_point = Some(v(100.0, 100.0));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragged {
            pos: v(130.0, 90.0),
            previous: v(120.0, 95.0),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::TranslatePath {
            layer: LayerId(0),
            delta: v(30.0, -10.0),
            pos: v(130.0, 90.0)
        }]
    );
}

#[test]
fn drag_without_hit_maps_to_nothing() {
    let state = state_with_path();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragged {
            pos: v(130.0, 90.0),
            previous: v(120.0, 95.0),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn circle_press_prefers_control_point_then_body_then_anchor() {
    let mut state = state_with_path();
    state.editor.mode = EditorMode::Circle;
    state
        .markers
        .push(RadiusMarker::new(AnchorRef::new(LayerId(0), 0), 30.0));

    // Kontrollpunkt bei (120, 100)
    let cp = map_intent_to_commands(&state, AppIntent::PointerPressed { pos: v(121.0, 101.0) });
    assert_eq!(
        cp,
        vec![AppCommand::SelectMarker {
            index: 0,
            drag_control_point: true
        }]
    );

    let body = map_intent_to_commands(&state, AppIntent::PointerPressed { pos: v(90.0, 110.0) });
    assert_eq!(
        body,
        vec![AppCommand::SelectMarker {
            index: 0,
            drag_control_point: false
        }]
    );

    let anchor = map_intent_to_commands(&state, AppIntent::PointerPressed { pos: v(203.0, 98.0) });
    assert_eq!(
        anchor,
        vec![AppCommand::CreateMarker {
            anchor: AnchorRef::new(LayerId(0), 1)
        }]
    );

    let empty = map_intent_to_commands(&state, AppIntent::PointerPressed { pos: v(500.0, 500.0) });
    assert_eq!(empty, vec![AppCommand::ClearMarkerSelection]);
}

#[test]
fn circle_press_creates_marker_on_hidden_layer_anchor() {
    let mut state = state_with_path();
    state.editor.mode = EditorMode::Circle;
    let mut layers = state.layers.layers().to_vec();
    layers[0].is_visible = false;
    state.layers.replace_layers(layers, 0);

    let commands = map_intent_to_commands(&state, AppIntent::PointerPressed { pos: v(101.0, 100.0) });
    assert_eq!(
        commands,
        vec![AppCommand::CreateMarker {
            anchor: AnchorRef::new(LayerId(0), 0)
        }]
    );

    // Hover berücksichtigt weiterhin nur sichtbare Layer
    let hover = map_intent_to_commands(&state, AppIntent::PointerMoved { pos: v(101.0, 100.0) });
    assert!(hover.is_empty());
}

#[test]
fn bezier_anchor_drag_outside_canvas_does_not_accumulate() {
    let mut state = state_with_path();
    state.editor.hit = Some(HitTarget {
        anchor: AnchorRef::new(LayerId(0), 0),
        kind: HitKind::Anchor,
    });

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragged {
            pos: v(-40.0, 100.0),
            previous: v(-20.0, 100.0),
        },
    );
    assert_eq!(
        commands,
        vec![AppCommand::MoveAnchor {
            anchor: AnchorRef::new(LayerId(0), 0),
            delta: v(0.0, 0.0),
        }]
    );
}

#[test]
fn circle_drag_only_while_dragging_control_point() {
    let mut state = state_with_path();
    state.editor.mode = EditorMode::Circle;
    state.editor.selected_marker = Some(0);
    let drag = AppIntent::PointerDragged {
        pos: v(160.0, 100.0),
        previous: v(150.0, 100.0),
    };

    assert!(map_intent_to_commands(&state, drag.clone()).is_empty());

    state.editor.dragging_control_point = true;
    assert_eq!(
        map_intent_to_commands(&state, drag),
        vec![AppCommand::SetMarkerRadiusFromPointer {
            index: 0,
            pos: v(160.0, 100.0)
        }]
    );
}

#[test]
fn space_arms_drag_with_hit_and_toggles_playback_without() {
    let mut state = state_with_path();
    let space = AppIntent::KeyPressed {
        key: EditorKey::Space,
        pointer: Some(v(110.0, 100.0)),
    };

    assert_eq!(
        map_intent_to_commands(&state, space.clone()),
        vec![AppCommand::TogglePlayback]
    );

    state.editor.hit = Some(HitTarget {
        anchor: AnchorRef::new(LayerId(0), 0),
        kind: HitKind::Anchor,
    });
    assert_eq!(
        map_intent_to_commands(&state, space),
        vec![AppCommand::ArmWholePathDrag {
            pos: v(110.0, 100.0)
        }]
    );
}

#[test]
fn mode_shortcuts_work_in_every_mode() {
    let mut state = state_with_path();
    state.editor.mode = EditorMode::Preview;
    for (c, mode) in [
        ('c', EditorMode::Circle),
        ('v', EditorMode::Bezier),
        ('p', EditorMode::Preview),
        ('t', EditorMode::Translate),
    ] {
        let commands = map_intent_to_commands(
            &state,
            AppIntent::KeyPressed {
                key: EditorKey::Char(c),
                pointer: None,
            },
        );
        assert_eq!(commands, vec![AppCommand::SetEditorMode { mode }]);
    }
    assert!(map_intent_to_commands(
        &state,
        AppIntent::KeyPressed {
            key: EditorKey::Char('x'),
            pointer: None
        }
    )
    .is_empty());
}

#[test]
fn enter_commits_only_paths_with_two_anchors_in_bezier_mode() {
    let mut state = state_with_path();
    let enter = AppIntent::KeyPressed {
        key: EditorKey::Enter,
        pointer: None,
    };
    assert_eq!(
        map_intent_to_commands(&state, enter.clone()),
        vec![AppCommand::AddLayer]
    );

    state.editor.mode = EditorMode::Circle;
    assert!(map_intent_to_commands(&state, enter.clone()).is_empty());

    let mut fresh = AppState::new();
    fresh.view.canvas_size = v(800.0, 600.0);
    assert!(map_intent_to_commands(&fresh, enter).is_empty());
}

#[test]
fn backspace_requires_selected_anchor() {
    let mut state = state_with_path();
    let backspace = AppIntent::KeyPressed {
        key: EditorKey::Backspace,
        pointer: None,
    };
    assert!(map_intent_to_commands(&state, backspace.clone()).is_empty());

    state.editor.selected_anchor = Some(AnchorRef::new(LayerId(0), 1));
    assert_eq!(
        map_intent_to_commands(&state, backspace),
        vec![AppCommand::RemoveSelectedAnchor]
    );
}

#[test]
fn hover_emits_only_on_change() {
    let mut state = state_with_path();
    let over_anchor = AppIntent::PointerMoved { pos: v(198.0, 101.0) };
    let expected = Some(AnchorRef::new(LayerId(0), 1));

    assert_eq!(
        map_intent_to_commands(&state, over_anchor.clone()),
        vec![AppCommand::SetHoveredAnchor { anchor: expected }]
    );

    state.editor.hovered_anchor = expected;
    assert!(map_intent_to_commands(&state, over_anchor).is_empty());
}

#[test]
fn frame_tick_advances_only_while_playing() {
    let mut state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::FrameTick).is_empty());
    state.animation.is_playing = true;
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::FrameTick),
        vec![AppCommand::AdvanceFrame]
    );
}

#[test]
fn speed_request_is_snapped_to_slider_grid() {
    let state = AppState::new();
    let commands =
        map_intent_to_commands(&state, AppIntent::SetAnimationSpeedRequested { seconds: 12.0 });
    assert_eq!(commands, vec![AppCommand::SetAnimationSpeed { seconds: 5.0 }]);

    let kind = map_intent_to_commands(
        &state,
        AppIntent::SetAnimationKindRequested {
            kind: AnimationKind::BackAndForth,
        },
    );
    assert_eq!(
        kind,
        vec![AppCommand::SetAnimationKind {
            kind: AnimationKind::BackAndForth
        }]
    );
}
