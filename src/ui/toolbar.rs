//! Toolbar für Moduswahl und Wiedergabe-Steuerung.

use crate::app::{AppIntent, AppState, EditorMode};
use crate::core::AnimationKind;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.mode;
    let options = &state.options;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Modus:");
            ui.separator();

            for mode in EditorMode::ALL {
                let text = format!("{} ({})", mode.label(), mode.shortcut());
                if ui
                    .add(egui::Button::new(text).selected(active == mode))
                    .clicked()
                {
                    events.push(AppIntent::SetModeRequested { mode });
                }
            }

            ui.separator();

            // ── Wiedergabe ──
            let play_text = if state.animation.is_playing {
                "⏸ Pause"
            } else {
                "▶ Play"
            };
            if ui.button(play_text).clicked() {
                events.push(AppIntent::TogglePlayRequested);
            }

            let mut speed = state.animation.speed_seconds;
            let slider = egui::Slider::new(
                &mut speed,
                options.animation_speed_min..=options.animation_speed_max,
            )
            .step_by(f64::from(options.animation_speed_step))
            .suffix(" s")
            .text("Speed");
            if ui.add(slider).changed() {
                events.push(AppIntent::SetAnimationSpeedRequested { seconds: speed });
            }

            let mut kind = state.animation.kind;
            egui::ComboBox::from_id_salt("animation_kind")
                .selected_text(kind.label())
                .show_ui(ui, |ui| {
                    for candidate in AnimationKind::ALL {
                        ui.selectable_value(&mut kind, candidate, candidate.label());
                    }
                });
            if kind != state.animation.kind {
                events.push(AppIntent::SetAnimationKindRequested { kind });
            }

            ui.separator();

            if ui
                .button("Optionen speichern")
                .on_hover_text("Schreibt pulse_path_editor.toml neben die Binary")
                .clicked()
            {
                events.push(AppIntent::SaveOptionsRequested);
            }
        });
    });

    events
}
