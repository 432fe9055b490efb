//! Layer-Panel: Liste, Sichtbarkeit, Umbenennen, Reihenfolge, Anlegen/Entfernen.

use crate::app::{AppIntent, AppState};
use crate::core::{CubicPath, LayerStore};

/// Laufendes Umbenennen eines Layers.
#[derive(Debug, Clone)]
struct RenameBuffer {
    index: usize,
    text: String,
    focused: bool,
}

/// UI-lokaler Zustand des Layer-Panels.
#[derive(Debug, Default)]
pub struct LayerPanel {
    rename: Option<RenameBuffer>,
}

impl LayerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendert das Panel als rechtes Seitenpanel und gibt erzeugte Events zurück.
    pub fn show(&mut self, ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
        let mut events = Vec::new();

        egui::SidePanel::right("layer_panel")
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Layer");
                ui.separator();

                let layers = state.layers.layers();
                let current = state.layers.current_layer_index();
                let can_remove = layers.len() > 1;

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (index, layer) in layers.iter().enumerate() {
                        ui.horizontal(|ui| {
                            let mut visible = layer.is_visible;
                            if ui.checkbox(&mut visible, "").changed() {
                                events.push(AppIntent::ToggleLayerVisibilityRequested { index });
                            }

                            self.show_name(ui, index, &layer.name, index == current, &mut events);

                            if ui
                                .add_enabled(index > 0, egui::Button::new("↑"))
                                .clicked()
                            {
                                events.push(AppIntent::MoveLayerRequested {
                                    from: index,
                                    to: index - 1,
                                });
                            }
                            if ui
                                .add_enabled(index + 1 < layers.len(), egui::Button::new("↓"))
                                .clicked()
                            {
                                events.push(AppIntent::MoveLayerRequested {
                                    from: index,
                                    to: index + 1,
                                });
                            }
                            if ui
                                .add_enabled(can_remove, egui::Button::new("✖"))
                                .on_hover_text("Layer entfernen")
                                .clicked()
                            {
                                events.push(AppIntent::RemoveLayerRequested { index });
                            }
                        });
                    }
                });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("+ Layer").clicked() {
                        events.push(AppIntent::AddLayerRequested);
                    }
                    if ui
                        .add_enabled(
                            state.current_anchor_count() > 0,
                            egui::Button::new("Pfad leeren"),
                        )
                        .clicked()
                    {
                        events.push(AppIntent::UpdateLayerPathRequested {
                            index: current,
                            path: CubicPath::new(),
                        });
                    }
                });
                ui.label("Doppelklick auf einen Namen zum Umbenennen");
            });

        events
    }

    fn show_name(
        &mut self,
        ui: &mut egui::Ui,
        index: usize,
        name: &str,
        is_current: bool,
        events: &mut Vec<AppIntent>,
    ) {
        if let Some(buffer) = self.rename.as_mut().filter(|b| b.index == index) {
            let response = ui.text_edit_singleline(&mut buffer.text);
            if !buffer.focused {
                response.request_focus();
                buffer.focused = true;
            }
            if response.lost_focus() {
                // Enter bestätigt; der Canvas darf ihn nicht mehr als Layer-Commit sehen
                if ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter)) {
                    events.push(AppIntent::RenameLayerRequested {
                        index,
                        name: buffer.text.trim().to_string(),
                    });
                }
                self.rename = None;
            }
            return;
        }

        let response = ui.add(egui::Button::new(name).selected(is_current));
        if response.double_clicked() {
            self.rename = Some(RenameBuffer {
                index,
                text: name.to_string(),
                focused: false,
            });
        } else if response.clicked() {
            events.push(AppIntent::SelectLayerRequested { index });
        }
    }
}
