//! Tasten-Erfassung für den Canvas.
//!
//! Liefert die für den Editor relevanten Tasten in Eingangsreihenfolge.

use crate::app::EditorKey;

/// Sammelt gedrückte Editor-Tasten aus den egui-Events dieses Frames.
pub(super) fn collect_editor_keys(ui: &egui::Ui) -> Vec<EditorKey> {
    ui.input(|i| {
        let mut keys = Vec::new();
        for event in &i.events {
            match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } if !modifiers.command => match key {
                    egui::Key::Space => keys.push(EditorKey::Space),
                    egui::Key::Backspace => keys.push(EditorKey::Backspace),
                    egui::Key::Enter => keys.push(EditorKey::Enter),
                    _ => {}
                },
                // Modus-Kürzel kommen als Text, damit das Tastaturlayout stimmt
                egui::Event::Text(text) => keys.extend(
                    text.chars()
                        .filter(|c| !c.is_whitespace())
                        .map(EditorKey::Char),
                ),
                _ => {}
            }
        }
        keys
    })
}
