use crate::app::CommandLog;
use crate::core::{CubicPath, Layer, LayerStack, LayerStore, MarkerSet};
use crate::shared::EditorOptions;

use super::{AnimationState, EditorState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Layer-Store (geordnete Layer + aktueller Index)
    pub layers: LayerStack,
    /// Alle Radius-Marker der Sitzung
    pub markers: MarkerSet,
    /// Canvas-Bearbeitungszustand
    pub editor: EditorState,
    /// Wiedergabe-Zustand
    pub animation: AnimationState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Radien, Schrittweiten)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen neuen App-State mit geladenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            layers: LayerStack::new(),
            markers: MarkerSet::new(),
            editor: EditorState::new(),
            animation: AnimationState::new(options.animation_speed_default),
            view: ViewState::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Aktuell bearbeiteter Layer
    pub fn current_layer(&self) -> Option<&Layer> {
        self.layers.current_layer()
    }

    /// Pfad des aktuell bearbeiteten Layers
    pub fn current_path(&self) -> Option<&CubicPath> {
        self.current_layer().map(|l| &l.path)
    }

    /// Anzahl der Anker im aktuellen Pfad (für UI-Anzeige)
    pub fn current_anchor_count(&self) -> usize {
        self.current_path().map_or(0, CubicPath::len)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
