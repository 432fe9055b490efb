//! Input-Source-Vertrag und Übersetzung eines Eingabe-Frames in `AppIntent`s.
//!
//! Der Host (egui, Tests, Headless-Treiber) liefert Zeigerposition, Tasten und
//! Canvas-Größe über [`InputSource`]; [`collect_intents`] erzeugt daraus die
//! Intents in fester Reihenfolge: Resize, Tasten, Drücken, Ziehen, Loslassen, Hover.

use super::AppIntent;
use crate::core::Vector2;

/// Für den Editor relevante Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Space,
    Backspace,
    Enter,
    /// Zeichen-Taste (Modus-Kürzel)
    Char(char),
}

/// Eingabe-Fähigkeit des Hosts für einen Frame.
pub trait InputSource {
    /// Zeigerposition in Canvas-Koordinaten (Pixel), falls über dem Canvas.
    fn pointer_position(&self) -> Option<Vector2>;

    /// Zeigerposition im vorherigen Frame.
    fn previous_pointer_position(&self) -> Option<Vector2>;

    /// Primäre Taste wurde in diesem Frame gedrückt.
    fn primary_pressed(&self) -> bool;

    /// Primäre Taste ist gehalten.
    fn primary_down(&self) -> bool;

    /// Primäre Taste wurde in diesem Frame losgelassen.
    fn primary_released(&self) -> bool;

    /// In diesem Frame gedrückte Tasten in Eingangsreihenfolge.
    fn pressed_keys(&self) -> Vec<EditorKey>;

    /// Aktuelle Canvas-Größe in Pixeln.
    fn canvas_size(&self) -> Vector2;
}

/// Plain-Data-Eingabe eines Frames (Headless-Betrieb und Tests).
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    pub pointer: Option<Vector2>,
    pub previous_pointer: Option<Vector2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    pub keys: Vec<EditorKey>,
    pub canvas_size: Vector2,
}

impl InputSource for InputFrame {
    fn pointer_position(&self) -> Option<Vector2> {
        self.pointer
    }

    fn previous_pointer_position(&self) -> Option<Vector2> {
        self.previous_pointer
    }

    fn primary_pressed(&self) -> bool {
        self.pressed
    }

    fn primary_down(&self) -> bool {
        self.down
    }

    fn primary_released(&self) -> bool {
        self.released
    }

    fn pressed_keys(&self) -> Vec<EditorKey> {
        self.keys.clone()
    }

    fn canvas_size(&self) -> Vector2 {
        self.canvas_size
    }
}

/// Sammelt die Intents eines Eingabe-Frames.
///
/// `known_canvas_size` ist die zuletzt übernommene Größe; ein Resize-Intent
/// entsteht nur bei Abweichung.
pub fn collect_intents(input: &impl InputSource, known_canvas_size: Vector2) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let size = input.canvas_size();
    if size != known_canvas_size {
        events.push(AppIntent::CanvasResized { size });
    }

    let pointer = input.pointer_position();
    for key in input.pressed_keys() {
        events.push(AppIntent::KeyPressed { key, pointer });
    }

    let Some(pos) = pointer else {
        if input.primary_released() {
            events.push(AppIntent::PointerReleased);
        }
        return events;
    };
    let previous = input.previous_pointer_position().unwrap_or(pos);

    if input.primary_pressed() {
        events.push(AppIntent::PointerPressed { pos });
    } else if input.primary_down() && previous != pos {
        events.push(AppIntent::PointerDragged { pos, previous });
    }

    if input.primary_released() {
        events.push(AppIntent::PointerReleased);
    } else if !input.primary_down() && previous != pos {
        events.push(AppIntent::PointerMoved { pos });
    }

    events
}
