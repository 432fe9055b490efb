//! Puls-Animation: Enthüllungs-Strategien und Hermite-Radius-Interpolation.
//!
//! Beide Strategien teilen Tabellenaufbau, Sampling und Interpolation; sie
//! unterscheiden sich nur darin, wie aus Frame und Frame-Anzahl der
//! Fortschritt berechnet wird.

use super::arc_length::{ArcLengthTable, ANIMATION_STEP};
use super::cubic_path::CubicPath;
use super::error::{EditError, EditResult};
use super::vector::Vector2;

/// Anzahl längen-äquidistanter Samples entlang des gesamten Pfads.
pub const PULSE_SAMPLE_COUNT: usize = 1000;
/// Samples mit kleinerem Radius werden nicht gezeichnet.
pub const MIN_VISIBLE_RADIUS: f32 = 0.5;
/// Obergrenze für Frames pro Halbzyklus, damit `2·T` in `u32` passt.
const MAX_TOTAL_FRAMES: u32 = u32::MAX / 2;

/// Abspiel-Strategie der Puls-Vorschau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationKind {
    /// Einmalige Enthüllung von vorne nach hinten, dann Neustart
    #[default]
    Default,
    /// Enthüllung hin und wieder zurück (Halbzyklus = `total_frames`)
    BackAndForth,
}

impl AnimationKind {
    /// Alle Strategien in Anzeigereihenfolge.
    pub const ALL: [AnimationKind; 2] = [AnimationKind::Default, AnimationKind::BackAndForth];

    /// Anzeigename für die Bedienoberfläche.
    pub fn label(self) -> &'static str {
        match self {
            AnimationKind::Default => "Default",
            AnimationKind::BackAndForth => "Back & Forth",
        }
    }

    /// Größe des Frame-Fensters, in dem `current_frame` umläuft.
    pub fn frame_window(self, total_frames: u32) -> u32 {
        let total = total_frames.clamp(1, MAX_TOTAL_FRAMES);
        match self {
            AnimationKind::Default => total,
            AnimationKind::BackAndForth => total * 2,
        }
    }

    /// Nächster Frame (modulo Frame-Fenster).
    pub fn advance(self, current_frame: u32, total_frames: u32) -> u32 {
        let window = self.frame_window(total_frames);
        (current_frame % window + 1) % window
    }

    /// Fortschritt in ganzen Frames, `0..=total_frames`.
    fn progress_frames(self, current_frame: u32, total_frames: u32) -> u32 {
        let total = total_frames.clamp(1, MAX_TOTAL_FRAMES);
        let frame = current_frame % self.frame_window(total);
        match self {
            AnimationKind::Default => frame,
            AnimationKind::BackAndForth => {
                if frame < total {
                    frame
                } else {
                    2 * total - frame
                }
            }
        }
    }

    /// Fortschritt `0.0..=1.0` für den aktuellen Frame.
    pub fn progress(self, current_frame: u32, total_frames: u32) -> f32 {
        let total = total_frames.clamp(1, MAX_TOTAL_FRAMES);
        self.progress_frames(current_frame, total) as f32 / total as f32
    }

    /// Anzahl der in diesem Frame enthüllten Samples.
    ///
    /// Ohne laufende Wiedergabe wird die volle Vorschau gezeigt.
    pub fn reveal_count(
        self,
        current_frame: u32,
        total_frames: u32,
        is_playing: bool,
        sample_count: usize,
    ) -> usize {
        if !is_playing {
            return sample_count;
        }
        let total = u64::from(total_frames.clamp(1, MAX_TOTAL_FRAMES));
        let progress = u64::from(self.progress_frames(current_frame, total_frames));
        ((sample_count as u64 * progress) / total).min(sample_count as u64) as usize
    }
}

/// Frame-Anzahl eines (Halb-)Zyklus: `round(fps × speed)`, mindestens 1.
pub fn total_frames(frames_per_second: u32, speed_seconds: f32) -> u32 {
    ((frames_per_second as f32 * speed_seconds).round() as u32).clamp(1, MAX_TOTAL_FRAMES)
}

/// Parameter des Puls-Samplings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseSettings {
    /// Parameter-Schrittweite der Längentabelle
    pub step: f32,
    /// Samples entlang des gesamten Pfads
    pub sample_count: usize,
    /// Sichtbarkeitsschwelle für Radien
    pub min_visible_radius: f32,
}

impl Default for PulseSettings {
    fn default() -> Self {
        Self {
            step: ANIMATION_STEP,
            sample_count: PULSE_SAMPLE_COUNT,
            min_visible_radius: MIN_VISIBLE_RADIUS,
        }
    }
}

/// Ein zu zeichnender Puls-Kreis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseSample {
    pub position: Vector2,
    pub radius: f32,
}

/// Steigung des Radius zwischen zwei Ankern (0 bei Längenabstand 0).
fn radius_slope(radii: &[f32], anchor_lengths: &[f32], a: usize, b: usize) -> f32 {
    let gap = anchor_lengths[b] - anchor_lengths[a];
    if gap > 0.0 {
        (radius_at(radii, b) - radius_at(radii, a)) / gap
    } else {
        0.0
    }
}

fn radius_at(radii: &[f32], index: usize) -> f32 {
    radii.get(index).copied().unwrap_or(0.0)
}

/// Hermite-interpolierter Radius an der Bogenlänge `target`.
///
/// Zwischen den einschließenden Ankern `l0`/`l1` mit
/// `h00·r0 + h10·Δl·r0' + h01·r1 + h11·Δl·r1'`; die Ableitungen sind
/// Differenzenquotienten zum äußeren Nachbarn (0 an den offenen Enden).
/// An Knoten (`target == l_i`) liefert die Formel exakt `radii[i]`.
pub fn interpolate_radius(table: &ArcLengthTable, radii: &[f32], target: f32) -> f32 {
    let lens = table.anchor_lengths();
    let (prev, next) = table.anchor_bracket(target);
    let l0 = lens[prev];
    let l1 = lens[next];
    let dl = l1 - l0;
    let t = if dl == 0.0 { 0.0 } else { (target - l0) / dl };

    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    let r0_deriv = if prev > 0 {
        radius_slope(radii, lens, prev - 1, prev)
    } else {
        0.0
    };
    let r1_deriv = if next + 1 < lens.len() {
        radius_slope(radii, lens, next, next + 1)
    } else {
        0.0
    };

    h00 * radius_at(radii, prev)
        + h10 * dl * r0_deriv
        + h01 * radius_at(radii, next)
        + h11 * dl * r1_deriv
}

/// Sichtbare Puls-Samples `k = 0..reveal_count` einer Längentabelle.
///
/// Sample `k` liegt bei Bogenlänge `L·k / (sample_count − 1)`.
pub fn sample_pulses(
    table: &ArcLengthTable,
    radii: &[f32],
    reveal_count: usize,
    settings: &PulseSettings,
) -> EditResult<Vec<PulseSample>> {
    if table.is_degenerate() {
        return Err(EditError::DegenerateGeometry);
    }
    let total = table.total_length();
    let denominator = settings.sample_count.saturating_sub(1).max(1) as f32;
    let count = reveal_count.min(settings.sample_count);

    let samples = (0..count)
        .filter_map(|k| {
            let target = total * k as f32 / denominator;
            let radius = interpolate_radius(table, radii, target);
            (radius > settings.min_visible_radius).then(|| PulseSample {
                position: table.point_at_length(target),
                radius,
            })
        })
        .collect();
    Ok(samples)
}

/// Eingaben für einen Puls-Frame eines Pfads.
#[derive(Debug, Clone, Copy)]
pub struct PulseFrame {
    pub kind: AnimationKind,
    pub current_frame: u32,
    pub total_frames: u32,
    pub is_playing: bool,
}

/// Baut die Längentabelle für `path` und liefert die Samples des Frames.
///
/// Pfade mit weniger als zwei Ankern ergeben keine Samples; Pfade der
/// Länge 0 liefern `DegenerateGeometry`.
pub fn pulse_frame(
    path: &CubicPath,
    radii: &[f32],
    frame: &PulseFrame,
    settings: &PulseSettings,
) -> EditResult<Vec<PulseSample>> {
    let Some(table) = ArcLengthTable::build(path, settings.step) else {
        return Ok(Vec::new());
    };
    let reveal = frame.kind.reveal_count(
        frame.current_frame,
        frame.total_frames,
        frame.is_playing,
        settings.sample_count,
    );
    sample_pulses(&table, radii, reveal, settings)
}
