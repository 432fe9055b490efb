use crate::core::{total_frames, AnimationKind, PulseFrame};

/// Wiedergabe-Zustand der Puls-Vorschau
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Wiedergabe läuft
    pub is_playing: bool,
    /// Dauer eines (Halb-)Zyklus in Sekunden
    pub speed_seconds: f32,
    /// Abspiel-Strategie
    pub kind: AnimationKind,
    /// Aktueller Frame innerhalb des Frame-Fensters
    pub current_frame: u32,
}

impl AnimationState {
    /// Gestoppte Wiedergabe mit gegebener Zyklusdauer.
    pub fn new(speed_seconds: f32) -> Self {
        Self {
            is_playing: false,
            speed_seconds,
            kind: AnimationKind::Default,
            current_frame: 0,
        }
    }

    /// Frame-Anzahl eines (Halb-)Zyklus bei `fps`.
    pub fn total_frames(&self, frames_per_second: u32) -> u32 {
        total_frames(frames_per_second, self.speed_seconds)
    }

    /// Eingaben für das Puls-Sampling des aktuellen Frames.
    pub fn pulse_frame(&self, frames_per_second: u32) -> PulseFrame {
        PulseFrame {
            kind: self.kind,
            current_frame: self.current_frame,
            total_frames: self.total_frames(frames_per_second),
            is_playing: self.is_playing,
        }
    }
}
