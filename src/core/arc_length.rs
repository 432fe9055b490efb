//! Arc-Length-Parametrisierung eines stückweise kubischen Pfads.
//!
//! Jedes Segment wird mit fester Parameter-Schrittweite abgetastet; die
//! euklidischen Abstände werden zu einer kumulativen Längentabelle aufsummiert.

use super::cubic_path::CubicPath;
use super::vector::Vector2;

/// Grobe Schrittweite für die Kontur-Darstellung.
pub const OUTLINE_STEP: f32 = 0.02;
/// Feine Schrittweite für das Puls-Sampling.
pub const ANIMATION_STEP: f32 = 0.005;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vector2, p1: Vector2, p2: Vector2, p3: Vector2, t: f32) -> Vector2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Anzahl der Abtastschritte pro Segment für eine Schrittweite.
///
/// `t = i / n` für `i = 1..=n`, damit `t = 1` exakt getroffen wird.
fn steps_per_segment(step: f32) -> usize {
    if step > 0.0 && step.is_finite() {
        (1.0 / step).round().max(1.0) as usize
    } else {
        1
    }
}

/// Kumulative Längentabellen eines Pfads.
///
/// - `points[j]` ↔ `lengths[j]`: jeder Abtastpunkt mit zurückgelegter Länge
///   (Index 0 = Pfadanfang mit Länge 0)
/// - `anchor_lengths[i]`: kumulative Länge an Anker `i` (Länge = Anker-Anzahl)
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable {
    points: Vec<Vector2>,
    lengths: Vec<f32>,
    anchor_lengths: Vec<f32>,
}

impl ArcLengthTable {
    /// Tastet `path` mit Parameter-Schrittweite `step` ab.
    ///
    /// Gibt `None` zurück, wenn der Pfad weniger als zwei Anker hat.
    pub fn build(path: &CubicPath, step: f32) -> Option<Self> {
        let first = path.anchors().first()?.pos;
        if path.len() < 2 {
            return None;
        }

        let n = steps_per_segment(step);
        let segment_count = path.len() - 1;
        let mut points = Vec::with_capacity(segment_count * n + 1);
        let mut lengths = Vec::with_capacity(segment_count * n + 1);
        let mut anchor_lengths = Vec::with_capacity(path.len());

        points.push(first);
        lengths.push(0.0);
        anchor_lengths.push(0.0);

        let mut total = 0.0f32;
        for [p0, p1, p2, p3] in path.segments() {
            let mut prev = p0;
            for i in 1..=n {
                let t = i as f32 / n as f32;
                let p = cubic_bezier(p0, p1, p2, p3, t);
                total += prev.distance(p);
                points.push(p);
                lengths.push(total);
                prev = p;
            }
            anchor_lengths.push(total);
        }

        Some(Self {
            points,
            lengths,
            anchor_lengths,
        })
    }

    /// Alle Abtastpunkte inklusive Pfadanfang.
    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    /// Kumulative Länge je Abtastpunkt.
    pub fn lengths(&self) -> &[f32] {
        &self.lengths
    }

    /// Kumulative Länge je Anker.
    pub fn anchor_lengths(&self) -> &[f32] {
        &self.anchor_lengths
    }

    /// Gesamtlänge `L` des Pfads.
    pub fn total_length(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// `true` bei Gesamtlänge 0 (ein Punkt oder deckungsgleiche Anker).
    pub fn is_degenerate(&self) -> bool {
        self.total_length() <= 0.0
    }

    /// Erster Abtastpunkt, dessen kumulative Länge ≥ `target` ist.
    ///
    /// Liegt `target` hinter dem Pfadende, wird der letzte Punkt geliefert.
    pub fn point_at_length(&self, target: f32) -> Vector2 {
        let idx = self
            .lengths
            .partition_point(|&len| len < target)
            .min(self.points.len() - 1);
        self.points[idx]
    }

    /// Anker-Indizes `(prev, next)`, die `target` einschließen.
    ///
    /// `next` ist der erste Anker mit Länge ≥ `target` (sonst der letzte),
    /// `prev = max(0, next − 1)`.
    pub fn anchor_bracket(&self, target: f32) -> (usize, usize) {
        let next = self
            .anchor_lengths
            .partition_point(|&len| len < target)
            .min(self.anchor_lengths.len() - 1);
        (next.saturating_sub(1), next)
    }
}
