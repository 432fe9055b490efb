//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{CubicPath, LayerId, PulseFrame, Vector2};

/// Darstellungszustand eines Ankers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorState {
    #[default]
    Inactive,
    Hover,
    Selected,
}

/// Ein sichtbarer Layer im aktuellen Frame.
#[derive(Debug, Clone)]
pub struct LayerScene {
    /// Stabile Layer-Kennung
    pub id: LayerId,
    /// Pfad-Snapshot des Layers
    pub path: CubicPath,
    /// Radius je Anker aus den gebundenen Markern (0 = kein Marker)
    pub radii: Vec<f32>,
    /// Selektierter Anker dieses Layers
    pub selected_anchor: Option<usize>,
    /// Anker unter dem Zeiger
    pub hovered_anchor: Option<usize>,
}

impl LayerScene {
    /// Darstellungszustand von Anker `index`; Selektion hat Vorrang vor Hover.
    pub fn anchor_state(&self, index: usize) -> AnchorState {
        if self.selected_anchor == Some(index) {
            AnchorState::Selected
        } else if self.hovered_anchor == Some(index) {
            AnchorState::Hover
        } else {
            AnchorState::Inactive
        }
    }
}

/// Ein aufgelöster Radius-Marker im aktuellen Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerScene {
    pub center: Vector2,
    pub radius: f32,
    pub is_selected: bool,
    /// Radius-Kontrollpunkt (nur beim selektierten Marker)
    pub control_point: Option<Vector2>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Sichtbare Layer in Zeichenreihenfolge
    pub layers: Vec<LayerScene>,
    /// Marker mit auflösbarer Anker-Referenz
    pub markers: Vec<MarkerScene>,
    /// Konturen, Anker, Handles und Marker zeichnen (alles außer Vorschau-Modus)
    pub show_editing_overlays: bool,
    /// Wiedergabe-Zustand für die Puls-Vorschau
    pub pulse: PulseFrame,
    /// Canvas-Größe in Pixeln
    pub canvas_size: Vector2,
    /// Laufzeit-Optionen für Farben, Größen, Schrittweiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn has_content(&self) -> bool {
        self.layers.iter().any(|l| !l.path.is_empty())
    }
}
