//! Zeichnet einen Layer: Puls-Vorschau, Kontur, Handle-Linien, Anker und Handles.

use super::{pulse_renderer, Renderer};
use crate::core::{ArcLengthTable, Vector2};
use crate::shared::{AnchorState, EditorOptions, LayerScene, RenderScene};

const ANCHOR_DIAMETER: f32 = 10.0;
const HANDLE_DIAMETER: f32 = 6.0;
const SELECTED_ANCHOR_STROKE: f32 = 3.0;

fn draw_anchor(
    renderer: &mut impl Renderer,
    pos: Vector2,
    state: AnchorState,
    options: &EditorOptions,
) {
    renderer.set_fill_color(None);
    renderer.set_stroke_color(Some(options.anchor_color));
    renderer.set_stroke_weight(1.0);

    match state {
        AnchorState::Inactive => {}
        AnchorState::Hover => renderer.set_fill_color(Some(options.anchor_highlight_color)),
        AnchorState::Selected => {
            renderer.set_fill_color(Some(options.anchor_highlight_color));
            renderer.set_stroke_weight(SELECTED_ANCHOR_STROKE);
        }
    }
    renderer.draw_circle(pos, ANCHOR_DIAMETER);
}

pub(super) fn draw_layer(renderer: &mut impl Renderer, layer: &LayerScene, scene: &RenderScene) {
    let options = &scene.options;
    let anchors = layer.path.anchors();
    match anchors {
        [] => return,
        [single] => {
            draw_anchor(renderer, single.pos, layer.anchor_state(0), options);
            return;
        }
        _ => {}
    }

    pulse_renderer::draw_pulses(renderer, layer, scene);

    if !scene.show_editing_overlays {
        return;
    }

    if let Some(table) = ArcLengthTable::build(&layer.path, options.outline_step) {
        renderer.set_stroke_color(Some(options.outline_color));
        renderer.set_stroke_weight(1.0);
        renderer.set_fill_color(None);
        renderer.draw_polyline(table.points());
    }

    renderer.set_stroke_color(Some(options.handle_line_color));
    renderer.set_stroke_weight(1.0);
    for anchor in anchors {
        for handle in [anchor.handle_in, anchor.handle_out].into_iter().flatten() {
            renderer.draw_line(anchor.pos, handle);
        }
    }

    for (i, anchor) in anchors.iter().enumerate() {
        draw_anchor(renderer, anchor.pos, layer.anchor_state(i), options);
    }

    renderer.set_fill_color(Some(options.handle_dot_color));
    renderer.set_stroke_color(Some(options.anchor_color));
    renderer.set_stroke_weight(1.0);
    for anchor in anchors {
        for handle in [anchor.handle_in, anchor.handle_out].into_iter().flatten() {
            renderer.draw_circle(handle, HANDLE_DIAMETER);
        }
    }
}
