//! Zeichnet die Puls-Vorschau eines Layers als gefüllte Kreise.

use super::Renderer;
use crate::core::{pulse_frame, EditError};
use crate::shared::{LayerScene, RenderScene};

pub(super) fn draw_pulses(renderer: &mut impl Renderer, layer: &LayerScene, scene: &RenderScene) {
    let settings = scene.options.pulse_settings();
    let samples = match pulse_frame(&layer.path, &layer.radii, &scene.pulse, &settings) {
        Ok(samples) => samples,
        // Pfad der Länge 0: nichts zu zeichnen
        Err(EditError::DegenerateGeometry) => return,
        Err(e) => {
            log::warn!("Puls-Vorschau für Layer {} übersprungen: {}", layer.id, e);
            return;
        }
    };
    if samples.is_empty() {
        return;
    }

    renderer.set_stroke_color(None);
    renderer.set_fill_color(Some(scene.options.pulse_color));
    for sample in &samples {
        renderer.draw_circle(sample.position, sample.radius * 2.0);
    }
}
