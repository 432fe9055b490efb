//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::LayerStore;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Modus: {}", state.editor.mode.label()));
            ui.separator();

            let layer_name = state
                .current_layer()
                .map(|l| l.name.as_str())
                .unwrap_or("-");
            ui.label(format!(
                "Layer: {} ({} gesamt) | Anker: {}",
                layer_name,
                state.layers.layers().len(),
                state.current_anchor_count()
            ));
            ui.separator();

            ui.label(format!("Marker: {}", state.markers.len()));
            ui.separator();

            let total = state.animation.total_frames(state.options.frames_per_second);
            let status = if state.animation.is_playing {
                "läuft"
            } else {
                "gestoppt"
            };
            ui.label(format!(
                "Wiedergabe: {} | Frame {} / {} | {}",
                status,
                state.animation.current_frame,
                total,
                state.animation.kind.label()
            ));
            ui.separator();

            ui.label(format!(
                "Canvas: {:.0} × {:.0}",
                state.view.canvas_size.x, state.view.canvas_size.y
            ));
        });
    });
}
