//! Zeichnet Radius-Marker und den Kontrollpunkt des selektierten Markers.

use super::Renderer;
use crate::shared::{EditorOptions, MarkerScene};

const CONTROL_POINT_DIAMETER: f32 = 10.0;

pub(super) fn draw_markers(
    renderer: &mut impl Renderer,
    markers: &[MarkerScene],
    options: &EditorOptions,
) {
    for marker in markers {
        renderer.set_fill_color(None);
        if marker.is_selected {
            renderer.set_stroke_color(Some(options.marker_selected_color));
            renderer.set_stroke_weight(2.0);
        } else {
            renderer.set_stroke_color(Some(options.marker_color));
            renderer.set_stroke_weight(1.0);
        }
        renderer.draw_circle(marker.center, marker.radius * 2.0);

        if let Some(cp) = marker.control_point {
            renderer.set_fill_color(Some(options.control_point_color));
            renderer.set_stroke_color(None);
            renderer.draw_circle(cp, CONTROL_POINT_DIAMETER);
        }
    }
}
