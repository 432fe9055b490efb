//! Use-Cases für die Puls-Wiedergabe.

use crate::app::AppState;
use crate::core::AnimationKind;

/// Startet oder stoppt die Wiedergabe; Stoppen setzt den Frame auf 0 zurück.
pub fn toggle_playback(state: &mut AppState) {
    let animation = &mut state.animation;
    animation.is_playing = !animation.is_playing;
    if !animation.is_playing {
        animation.current_frame = 0;
    }
    log::info!(
        "Wiedergabe {}",
        if animation.is_playing {
            "gestartet"
        } else {
            "gestoppt"
        }
    );
}

/// Setzt die Zyklusdauer in Sekunden.
pub fn set_speed(state: &mut AppState, seconds: f32) {
    if seconds.is_nan() || seconds <= 0.0 {
        log::warn!("Ungültige Zyklusdauer {} ignoriert", seconds);
        return;
    }
    state.animation.speed_seconds = seconds;
    log::info!(
        "Zyklusdauer: {:.1} s ({} Frames)",
        seconds,
        state.animation.total_frames(state.options.frames_per_second)
    );
}

/// Wählt die Abspiel-Strategie.
pub fn set_kind(state: &mut AppState, kind: AnimationKind) {
    state.animation.kind = kind;
    log::info!("Animationstyp: {}", kind.label());
}

/// Schaltet den Frame modulo Frame-Fenster weiter (nur während der Wiedergabe).
pub fn advance_frame(state: &mut AppState) {
    let animation = &mut state.animation;
    if !animation.is_playing {
        return;
    }
    let total = animation.total_frames(state.options.frames_per_second);
    animation.current_frame = animation.kind.advance(animation.current_frame, total);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopping_resets_frame() {
        let mut state = AppState::new();
        toggle_playback(&mut state);
        for _ in 0..10 {
            advance_frame(&mut state);
        }
        assert_eq!(state.animation.current_frame, 10);

        toggle_playback(&mut state);
        assert!(!state.animation.is_playing);
        assert_eq!(state.animation.current_frame, 0);
    }

    #[test]
    fn advance_wraps_per_kind() {
        let mut state = AppState::new();
        set_speed(&mut state, 0.5);
        toggle_playback(&mut state);
        for _ in 0..30 {
            advance_frame(&mut state);
        }
        assert_eq!(state.animation.current_frame, 0);

        set_kind(&mut state, AnimationKind::BackAndForth);
        for _ in 0..30 {
            advance_frame(&mut state);
        }
        assert_eq!(state.animation.current_frame, 30);
        for _ in 0..30 {
            advance_frame(&mut state);
        }
        assert_eq!(state.animation.current_frame, 0);
    }

    #[test]
    fn invalid_speed_is_ignored_and_paused_state_does_not_advance() {
        let mut state = AppState::new();
        set_speed(&mut state, -1.0);
        set_speed(&mut state, f32::NAN);
        assert_eq!(state.animation.speed_seconds, 1.0);
        advance_frame(&mut state);
        assert_eq!(state.animation.current_frame, 0);
    }
}
