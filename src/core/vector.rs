//! 2D-Vektor für Anker, Handles und Zeigerpositionen.
//!
//! `Vector2` ist `glam::Vec2`. Reine Kombinatoren (`+`, `-`, `lerp`, `distance`)
//! liefern neue Werte, `+=` verschiebt den Empfänger in-place (Drag-Pfad).

pub use glam::Vec2 as Vector2;

/// Spiegelt `point` am Zentrum `center`: `2·center − point`.
pub fn mirror_through(point: Vector2, center: Vector2) -> Vector2 {
    2.0 * center - point
}

/// Klemmt einen Punkt auf das Rechteck `[0, size.x] × [0, size.y]`.
pub fn clamp_to_canvas(point: Vector2, size: Vector2) -> Vector2 {
    point.clamp(Vector2::ZERO, size.max(Vector2::ZERO))
}

/// Prüft, ob ein Punkt innerhalb (inklusive Rand) der Zeichenfläche liegt.
pub fn is_within_canvas(point: Vector2, size: Vector2) -> bool {
    point.x >= 0.0 && point.x <= size.x && point.y >= 0.0 && point.y <= size.y
}
