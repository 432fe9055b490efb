use crate::core::{AnchorRef, HandleKind, Vector2};

/// Bearbeitungsmodus des Canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Anker setzen, verschieben und löschen; Handles ziehen
    #[default]
    Bezier,
    /// Radius-Marker an Ankern anlegen und skalieren
    Circle,
    /// Reserviert: anerkannter Modus ohne Wirkung
    Translate,
    /// Nur Puls-Vorschau, keine Bearbeitung
    Preview,
}

impl EditorMode {
    /// Alle Modi in Anzeigereihenfolge.
    pub const ALL: [EditorMode; 4] = [
        EditorMode::Bezier,
        EditorMode::Circle,
        EditorMode::Translate,
        EditorMode::Preview,
    ];

    /// Tastenkürzel-Zuordnung (`c`, `v`, `p`, `t`).
    pub fn from_shortcut(key: char) -> Option<Self> {
        match key {
            'c' => Some(EditorMode::Circle),
            'v' => Some(EditorMode::Bezier),
            'p' => Some(EditorMode::Preview),
            't' => Some(EditorMode::Translate),
            _ => None,
        }
    }

    /// Tastenkürzel des Modus.
    pub fn shortcut(self) -> char {
        match self {
            EditorMode::Bezier => 'v',
            EditorMode::Circle => 'c',
            EditorMode::Translate => 't',
            EditorMode::Preview => 'p',
        }
    }

    /// Anzeigename für die Bedienoberfläche.
    pub fn label(self) -> &'static str {
        match self {
            EditorMode::Bezier => "Bezier",
            EditorMode::Circle => "Circle",
            EditorMode::Translate => "Translate",
            EditorMode::Preview => "Preview",
        }
    }

    /// `true` in allen Modi außer der Vorschau.
    pub fn allows_editing(self) -> bool {
        self != EditorMode::Preview
    }
}

/// Was beim Drücken getroffen wurde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Anchor,
    Handle(HandleKind),
}

/// Aktives Drag-Ziel im Bezier-Modus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTarget {
    pub anchor: AnchorRef,
    pub kind: HitKind,
}

/// Zustand der Canvas-Bearbeitung einer Sitzung
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Bearbeitungsmodus
    pub mode: EditorMode,
    /// Drag-Ziel seit dem letzten Drücken
    pub hit: Option<HitTarget>,
    /// Selektierter Anker (Ziel von Backspace)
    pub selected_anchor: Option<AnchorRef>,
    /// Anker unter dem Zeiger
    pub hovered_anchor: Option<AnchorRef>,
    /// Ganzen Pfad verschieben statt einzelner Anker/Handles
    pub drag_whole: bool,
    /// Letzter Zeigerpunkt beim Ganz-Pfad-Drag
    pub last_drag_point: Option<Vector2>,
    /// Index des selektierten Markers
    pub selected_marker: Option<usize>,
    /// Radius-Kontrollpunkt des selektierten Markers wird gezogen
    pub dragging_control_point: bool,
}

impl EditorState {
    /// Erstellt den Standard-Editorzustand (Bezier-Modus).
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt Drag-Zustand nach dem Loslassen zurück.
    pub fn end_drag(&mut self) {
        self.hit = None;
        self.drag_whole = false;
        self.last_drag_point = None;
        self.dragging_control_point = false;
    }

    /// Verwirft Treffer, Selektion, Hover und Drag (z.B. bei Layer-Wechsel).
    pub fn clear_interaction(&mut self) {
        self.end_drag();
        self.selected_anchor = None;
        self.hovered_anchor = None;
    }
}
