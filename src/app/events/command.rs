use crate::app::state::EditorMode;
use crate::core::{AnchorRef, AnimationKind, CubicPath, HandleKind, LayerId, Vector2};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Modus & View ===
    /// Bearbeitungsmodus wechseln
    SetEditorMode { mode: EditorMode },
    /// Canvas-Größe übernehmen (Pfad- und Layer-Zustand bleibt unberührt)
    SetCanvasSize { size: Vector2 },
    /// Hover-Anker setzen oder löschen
    SetHoveredAnchor { anchor: Option<AnchorRef> },

    // === Bezier-Bearbeitung ===
    /// Anker an Position an den aktuellen Pfad anhängen
    AddAnchor { pos: Vector2 },
    /// Anker selektieren und als Drag-Ziel merken
    BeginAnchorDrag { anchor: AnchorRef },
    /// Handle als Drag-Ziel merken
    BeginHandleDrag { anchor: AnchorRef, kind: HandleKind },
    /// Anker um Delta verschieben (inkl. angrenzender Handles)
    MoveAnchor { anchor: AnchorRef, delta: Vector2 },
    /// Handle auf absolute Position setzen (Gegenhandle wird gespiegelt)
    MoveHandle {
        anchor: AnchorRef,
        kind: HandleKind,
        pos: Vector2,
    },
    /// Ganz-Pfad-Drag aktivieren
    ArmWholePathDrag { pos: Vector2 },
    /// Ganzen Pfad eines Layers verschieben; `pos` wird neuer Drag-Bezugspunkt
    TranslatePath {
        layer: LayerId,
        delta: Vector2,
        pos: Vector2,
    },
    /// Selektierten Anker löschen
    RemoveSelectedAnchor,
    /// Drag-Zustand nach Loslassen zurücksetzen
    EndDrag,

    // === Marker ===
    /// Neuen Marker mit Standardradius an Anker binden
    CreateMarker { anchor: AnchorRef },
    /// Marker selektieren (optional Kontrollpunkt-Drag beginnen)
    SelectMarker {
        index: usize,
        drag_control_point: bool,
    },
    /// Marker-Selektion aufheben
    ClearMarkerSelection,
    /// Radius eines Markers aus Zeigerposition setzen
    SetMarkerRadiusFromPointer { index: usize, pos: Vector2 },

    // === Wiedergabe ===
    /// Wiedergabe umschalten (Stopp setzt Frame auf 0)
    TogglePlayback,
    /// Zyklusdauer setzen
    SetAnimationSpeed { seconds: f32 },
    /// Abspiel-Strategie setzen
    SetAnimationKind { kind: AnimationKind },
    /// Frame weiterschalten
    AdvanceFrame,

    // === Layer ===
    /// Neuen Layer anlegen und aktivieren
    AddLayer,
    /// Layer entfernen
    RemoveLayer { index: usize },
    /// Aktuellen Layer wechseln
    SelectLayer { index: usize },
    /// Sichtbarkeit umschalten
    ToggleLayerVisibility { index: usize },
    /// Layer umbenennen
    RenameLayer { index: usize, name: String },
    /// Layer verschieben
    MoveLayer { from: usize, to: usize },
    /// Pfad eines Layers ersetzen
    UpdateLayerPath { index: usize, path: CubicPath },

    // === Optionen ===
    /// Optionen speichern
    SaveOptions,
}
