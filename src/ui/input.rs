//! Canvas-Input: egui-Zeigerzustand → `InputFrame` in Canvas-Koordinaten.

use super::keyboard;
use crate::app::InputFrame;
use crate::core::Vector2;

/// Verwaltet den Zeigerzustand des Canvas über Frames hinweg.
#[derive(Debug, Default)]
pub struct CanvasInput {
    previous_pointer: Option<Vector2>,
    /// Primäre Taste wurde über dem Canvas gedrückt und ist noch nicht losgelassen
    pressed_on_canvas: bool,
}

impl CanvasInput {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erfasst den Eingabe-Frame des Canvas.
    ///
    /// Drücken zählt nur über dem Canvas; ein dort begonnener Drag wird auch
    /// außerhalb weiterverfolgt, damit die Klemmung an den Rand greift.
    pub fn capture(&mut self, ui: &egui::Ui, response: &egui::Response) -> InputFrame {
        let rect = response.rect;
        let (latest, pressed, down, released) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
            )
        });

        let pressed = pressed && response.hovered();
        if pressed {
            self.pressed_on_canvas = true;
        }
        let tracking = self.pressed_on_canvas;
        let released = released && tracking;
        if released || !down {
            self.pressed_on_canvas = false;
        }

        let pointer = latest
            .filter(|p| tracking || rect.contains(*p))
            .map(|p| Vector2::new(p.x - rect.min.x, p.y - rect.min.y));

        let keys = if ui.ctx().wants_keyboard_input() {
            Vec::new()
        } else {
            keyboard::collect_editor_keys(ui)
        };

        let frame = InputFrame {
            pointer,
            previous_pointer: self.previous_pointer,
            pressed,
            down: down && tracking,
            released,
            keys,
            canvas_size: Vector2::new(rect.width(), rect.height()),
        };
        self.previous_pointer = pointer;
        frame
    }
}
