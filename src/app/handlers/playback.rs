//! Handler für die Puls-Wiedergabe.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::AnimationKind;

/// Startet/stoppt die Wiedergabe.
pub fn toggle(state: &mut AppState) {
    use_cases::playback::toggle_playback(state);
}

/// Setzt die Zyklusdauer.
pub fn set_speed(state: &mut AppState, seconds: f32) {
    use_cases::playback::set_speed(state, seconds);
}

/// Setzt die Abspiel-Strategie.
pub fn set_kind(state: &mut AppState, kind: AnimationKind) {
    use_cases::playback::set_kind(state, kind);
}

/// Schaltet einen Frame weiter.
pub fn advance(state: &mut AppState) {
    use_cases::playback::advance_frame(state);
}
