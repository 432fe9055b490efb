use approx::assert_relative_eq;
use pulse_path_editor::core::{pulse_frame, AnimationKind, PulseFrame, PulseSettings};
use pulse_path_editor::{
    draw_scene, AnchorRef, AppController, AppIntent, AppState, CubicPath, Layer, LayerId,
    LayerStore, RadiusMarker, RecordingRenderer, Vector2,
};

fn straight_path() -> CubicPath {
    CubicPath::from_points(&[Vector2::new(0.0, 0.0), Vector2::new(100.0, 0.0)])
}

fn playing_frame(kind: AnimationKind, current_frame: u32) -> PulseFrame {
    PulseFrame {
        kind,
        current_frame,
        total_frames: 60,
        is_playing: true,
    }
}

#[test]
fn test_half_cycle_reveals_first_half_with_growing_radii() {
    let samples = pulse_frame(
        &straight_path(),
        &[20.0, 40.0],
        &playing_frame(AnimationKind::Default, 30),
        &PulseSettings::default(),
    )
    .expect("Pfad mit Länge > 0 sollte Samples liefern");

    assert_eq!(samples.len(), 500);
    assert_relative_eq!(samples[0].radius, 20.0, epsilon = 1e-4);
    assert_relative_eq!(samples[0].position.x, 0.0, epsilon = 1e-3);

    let last = samples[samples.len() - 1];
    assert!(last.position.x < 50.0 && last.position.x > 49.0);
    // Hermite mit flachen Enden: Mitte bei 30
    assert!(last.radius < 30.0 && last.radius > 29.0);

    for pair in samples.windows(2) {
        assert!(pair[1].radius >= pair[0].radius - 1e-4);
        assert!(pair[1].position.x > pair[0].position.x);
    }
}

#[test]
fn test_default_wraps_and_back_and_forth_mirrors() {
    let settings = PulseSettings::default();
    let radii = [10.0, 10.0];
    let count = |kind, frame| {
        pulse_frame(&straight_path(), &radii, &playing_frame(kind, frame), &settings)
            .expect("Samples")
            .len()
    };

    assert_eq!(count(AnimationKind::Default, 59), 983);
    assert_eq!(count(AnimationKind::Default, 60), 0);

    for f in [0, 10, 30, 59, 60] {
        assert_eq!(
            count(AnimationKind::BackAndForth, f),
            count(AnimationKind::BackAndForth, 120 - f)
        );
    }
}

#[test]
fn test_playback_ticks_reveal_pulses_in_rendered_scene() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut layer = Layer::new(LayerId(0), "Layer 0");
    layer.path = straight_path();
    state.layers.replace_layers(vec![layer], 0);
    state
        .markers
        .push(RadiusMarker::new(AnchorRef::new(LayerId(0), 0), 20.0));
    state
        .markers
        .push(RadiusMarker::new(AnchorRef::new(LayerId(0), 1), 40.0));

    let pulse_count = |controller: &AppController, state: &AppState| {
        let mut recorder = RecordingRenderer::new();
        draw_scene(&mut recorder, &controller.build_render_scene(state));
        recorder
            .circles()
            .filter(|(_, _, style)| style.stroke.is_none())
            .count()
    };

    // Gestoppt: volle Vorschau
    assert_eq!(pulse_count(&controller, &state), 1000);

    controller
        .handle_intent(&mut state, AppIntent::TogglePlayRequested)
        .expect("Play sollte durchlaufen");
    assert_eq!(pulse_count(&controller, &state), 0);

    for _ in 0..30 {
        controller
            .handle_intent(&mut state, AppIntent::FrameTick)
            .expect("FrameTick sollte durchlaufen");
    }
    assert_eq!(state.animation.current_frame, 30);
    assert_eq!(pulse_count(&controller, &state), 500);
}

#[test]
fn test_speed_and_kind_requests_change_frame_window() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetAnimationSpeedRequested { seconds: 2.04 },
        )
        .expect("Speed sollte gesetzt werden");
    assert_relative_eq!(state.animation.speed_seconds, 2.0, epsilon = 1e-5);
    assert_eq!(state.animation.total_frames(60), 120);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetAnimationKindRequested {
                kind: AnimationKind::BackAndForth,
            },
        )
        .expect("Animationstyp sollte gesetzt werden");
    assert_eq!(state.animation.kind, AnimationKind::BackAndForth);
}
