//! Layer-Modell und Layer-Store-Vertrag.
//!
//! Der Core verändert die Layer-Sammlung nie direkt: jede Änderung erzeugt
//! eine vollständige neue Layer-Folge plus neuen aktuellen Index, die der
//! Store über [`LayerStore::replace_layers`] atomar übernimmt.

use super::cubic_path::CubicPath;
use std::fmt;

/// Stabile Layer-Kennung; überlebt Umsortieren und Ersetzen der Layer-Folge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein benannter, ein-/ausblendbarer Layer mit genau einem Pfad.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Stabile Kennung (Ziel von Marker-Referenzen)
    pub id: LayerId,
    /// Eindeutiger Name unter den Geschwister-Layern
    pub name: String,
    /// Sichtbarkeit im Canvas
    pub is_visible: bool,
    /// Exklusiv besessener Pfad
    pub path: CubicPath,
}

impl Layer {
    /// Erstellt einen sichtbaren Layer mit leerem Pfad.
    pub fn new(id: LayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_visible: true,
            path: CubicPath::new(),
        }
    }
}

/// Nächste freie Layer-ID (max + 1).
pub fn next_layer_id(layers: &[Layer]) -> LayerId {
    LayerId(layers.iter().map(|l| l.id.0).max().map_or(0, |m| m + 1))
}

/// Erzeugt einen eindeutigen Namen der Form `Layer N`.
///
/// Startet bei der aktuellen Layer-Anzahl und zählt hoch, bis der Name frei ist.
pub fn unique_layer_name(layers: &[Layer]) -> String {
    let mut counter = layers.len();
    loop {
        let candidate = format!("Layer {counter}");
        if !layers.iter().any(|l| l.name == candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Schnittstelle des Layer-Stores, über den alle Core-Änderungen laufen.
pub trait LayerStore {
    /// Geordnete Layer-Folge.
    fn layers(&self) -> &[Layer];

    /// Index des aktuell bearbeiteten Layers.
    fn current_layer_index(&self) -> usize;

    /// Übernimmt eine vollständige neue Layer-Folge samt aktuellem Index.
    fn replace_layers(&mut self, layers: Vec<Layer>, current_index: usize);

    /// Aktuell bearbeiteter Layer.
    fn current_layer(&self) -> Option<&Layer> {
        self.layers().get(self.current_layer_index())
    }

    /// Sucht einen Layer über seine stabile ID.
    fn find_layer(&self, id: LayerId) -> Option<(usize, &Layer)> {
        self.layers().iter().enumerate().find(|(_, l)| l.id == id)
    }
}

/// In-Memory-Implementierung des Layer-Stores.
///
/// Invariante: enthält immer mindestens einen Layer, der aktuelle Index ist gültig.
#[derive(Debug, Clone)]
pub struct LayerStack {
    layers: Vec<Layer>,
    current_index: usize,
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStack {
    /// Startzustand: ein leerer, sichtbarer Layer `Layer 0`.
    pub fn new() -> Self {
        Self {
            layers: vec![Layer::new(LayerId(0), "Layer 0")],
            current_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl LayerStore for LayerStack {
    fn layers(&self) -> &[Layer] {
        &self.layers
    }

    fn current_layer_index(&self) -> usize {
        self.current_index
    }

    fn replace_layers(&mut self, layers: Vec<Layer>, current_index: usize) {
        if layers.is_empty() {
            log::warn!("Leere Layer-Folge verworfen: mindestens ein Layer muss bestehen");
            return;
        }
        self.current_index = current_index.min(layers.len() - 1);
        self.layers = layers;
    }
}
