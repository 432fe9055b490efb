//! Zeichnen der Render-Szene über eine austauschbare Renderer-Fähigkeit.
//!
//! Der Core liest nie Pixel zurück; alles Zeichnen läuft über [`Renderer`].
//! Die Sub-Renderer (`path_renderer`, `marker_renderer`, `pulse_renderer`)
//! sind zustandslos und werden von [`draw_scene`] in fester Reihenfolge gerufen.

mod marker_renderer;
mod path_renderer;
mod pulse_renderer;
mod recording;

pub use crate::shared::RenderScene;
pub use recording::{DrawCommand, DrawStyle, RecordingRenderer};

use crate::core::Vector2;

/// RGBA-Farbe mit Komponenten in `0.0..=1.0`.
pub type Rgba = [f32; 4];

/// Zeichen-Fähigkeit des Hosts (p5-artiger Zustandsautomat).
pub trait Renderer {
    /// Füllt die gesamte Fläche mit `color`.
    fn clear(&mut self, color: Rgba);

    /// Konturfarbe setzen; `None` schaltet die Kontur ab.
    fn set_stroke_color(&mut self, color: Option<Rgba>);

    /// Konturstärke in Pixeln.
    fn set_stroke_weight(&mut self, weight: f32);

    /// Füllfarbe setzen; `None` schaltet die Füllung ab.
    fn set_fill_color(&mut self, color: Option<Rgba>);

    /// Kreis mit Mittelpunkt und Durchmesser.
    fn draw_circle(&mut self, center: Vector2, diameter: f32);

    /// Offener Linienzug durch alle Punkte.
    fn draw_polyline(&mut self, points: &[Vector2]);

    /// Einzelne Strecke.
    fn draw_line(&mut self, from: Vector2, to: Vector2);
}

/// Zeichnet die komplette Szene.
///
/// Reihenfolge: Hintergrund, je sichtbarem Layer Puls-Vorschau und (außer im
/// Vorschau-Modus) Kontur, Handles und Anker; danach die Marker.
pub fn draw_scene(renderer: &mut impl Renderer, scene: &RenderScene) {
    renderer.clear(scene.options.background_color);

    for layer in &scene.layers {
        path_renderer::draw_layer(renderer, layer, scene);
    }

    if scene.show_editing_overlays {
        marker_renderer::draw_markers(renderer, &scene.markers, &scene.options);
    }
}
