use crate::app::input::EditorKey;
use crate::app::state::EditorMode;
use crate::core::{AnimationKind, CubicPath, Vector2};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste im Canvas gedrückt
    PointerPressed { pos: Vector2 },
    /// Zeiger mit gehaltener Taste bewegt
    PointerDragged { pos: Vector2, previous: Vector2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Zeiger ohne gedrückte Taste bewegt (Hover)
    PointerMoved { pos: Vector2 },
    /// Taste gedrückt
    KeyPressed { key: EditorKey, pointer: Option<Vector2> },
    /// Canvas-Größe hat sich geändert
    CanvasResized { size: Vector2 },
    /// Nächster Animations-Frame
    FrameTick,

    /// Bearbeitungsmodus wechseln (Modus-Buttons)
    SetModeRequested { mode: EditorMode },
    /// Wiedergabe starten/stoppen
    TogglePlayRequested,
    /// Zyklusdauer in Sekunden setzen
    SetAnimationSpeedRequested { seconds: f32 },
    /// Abspiel-Strategie wählen
    SetAnimationKindRequested { kind: AnimationKind },

    /// Neuen leeren Layer anlegen und aktivieren
    AddLayerRequested,
    /// Layer entfernen
    RemoveLayerRequested { index: usize },
    /// Layer zum aktuellen machen
    SelectLayerRequested { index: usize },
    /// Sichtbarkeit eines Layers umschalten
    ToggleLayerVisibilityRequested { index: usize },
    /// Layer umbenennen
    RenameLayerRequested { index: usize, name: String },
    /// Layer in der Reihenfolge verschieben
    MoveLayerRequested { from: usize, to: usize },
    /// Pfad eines Layers ersetzen
    UpdateLayerPathRequested { index: usize, path: CubicPath },

    /// Optionen neben der Binary speichern
    SaveOptionsRequested,
}
