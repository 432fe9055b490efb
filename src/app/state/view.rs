use crate::core::{is_within_canvas, Vector2};

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Canvas-Größe in Pixeln
    pub canvas_size: Vector2,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (Canvas noch ohne Größe).
    pub fn new() -> Self {
        Self::default()
    }

    /// Liegt `point` innerhalb der Canvas-Grenzen (inklusive Rand)?
    pub fn contains(&self, point: Vector2) -> bool {
        is_within_canvas(point, self.canvas_size)
    }
}
