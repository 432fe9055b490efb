//! Radius-Marker ("Pulse"): ein Radiuswert, gebunden an einen Anker eines Layers.
//!
//! Marker besitzen ihren Pfad nicht. Die Bindung ist ein `(LayerId, Anker-Index)`-Paar,
//! das bei jedem Zugriff über die Layer-Folge aufgelöst wird. Nach `remove_anchor`
//! kann ein Marker ins Leere zeigen; solche Marker werden übersprungen.

use super::error::{EditError, EditResult};
use super::layer::{Layer, LayerId};
use super::vector::Vector2;

/// Referenz auf einen Anker: Layer-ID plus Anker-Index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorRef {
    pub layer: LayerId,
    pub index: usize,
}

impl AnchorRef {
    pub fn new(layer: LayerId, index: usize) -> Self {
        Self { layer, index }
    }

    /// Löst die Referenz zur aktuellen Anker-Position auf.
    pub fn resolve(&self, layers: &[Layer]) -> EditResult<Vector2> {
        let layer = layers
            .iter()
            .find(|l| l.id == self.layer)
            .ok_or(EditError::UnknownLayer { id: self.layer })?;
        layer
            .path
            .anchor(self.index)
            .map(|a| a.pos)
            .ok_or(EditError::DanglingMarkerReference {
                layer: self.layer,
                index: self.index,
            })
    }
}

/// Geometrie des Radius-Kontrollpunkts eines Markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerHandleSpec {
    /// Abstand des Kontrollpunkts nach innen vom rechten Kreisrand
    pub inset: f32,
    /// Trefferradius des Kontrollpunkts (strikt kleiner)
    pub hit_radius: f32,
    /// Untergrenze für per Drag gesetzte Radien
    pub radius_min: f32,
    /// Obergrenze für per Drag gesetzte Radien
    pub radius_max: f32,
}

impl Default for MarkerHandleSpec {
    fn default() -> Self {
        Self {
            inset: 10.0,
            hit_radius: 5.0,
            radius_min: 10.0,
            radius_max: 100.0,
        }
    }
}

/// Radius-Marker an einem Anker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusMarker {
    pub anchor: AnchorRef,
    pub radius: f32,
}

impl RadiusMarker {
    pub fn new(anchor: AnchorRef, radius: f32) -> Self {
        Self { anchor, radius }
    }

    /// Mittelpunkt des Markers (= Anker-Position).
    pub fn center(&self, layers: &[Layer]) -> EditResult<Vector2> {
        self.anchor.resolve(layers)
    }

    /// Trifft `point` den Kreis (Abstand ≤ Radius)?
    pub fn contains(&self, point: Vector2, layers: &[Layer]) -> bool {
        self.center(layers)
            .is_ok_and(|c| c.distance(point) <= self.radius)
    }

    /// Position des Radius-Kontrollpunkts `(x + r − inset, y)`.
    pub fn control_point(&self, layers: &[Layer], spec: &MarkerHandleSpec) -> EditResult<Vector2> {
        let c = self.center(layers)?;
        Ok(Vector2::new(c.x + self.radius - spec.inset, c.y))
    }

    /// Trifft `point` den Kontrollpunkt?
    pub fn hits_control_point(
        &self,
        point: Vector2,
        layers: &[Layer],
        spec: &MarkerHandleSpec,
    ) -> bool {
        self.control_point(layers, spec)
            .is_ok_and(|cp| cp.distance(point) < spec.hit_radius)
    }

    /// Setzt den Radius aus dem horizontalen Abstand des Zeigers zum Mittelpunkt.
    ///
    /// `r = clamp(dx + inset, radius_min, radius_max)`; gibt den neuen Radius zurück.
    pub fn set_radius_from_control_point(
        &mut self,
        point: Vector2,
        layers: &[Layer],
        spec: &MarkerHandleSpec,
    ) -> EditResult<f32> {
        let c = self.center(layers)?;
        let dx = point.x - c.x;
        self.radius = (dx + spec.inset).clamp(spec.radius_min, spec.radius_max);
        Ok(self.radius)
    }
}

/// Alle Marker der Sitzung in Erstellungsreihenfolge.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    markers: Vec<RadiusMarker>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Marker hinzu und gibt seinen Index zurück.
    pub fn push(&mut self, marker: RadiusMarker) -> usize {
        self.markers.push(marker);
        self.markers.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&RadiusMarker> {
        self.markers.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut RadiusMarker> {
        self.markers.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RadiusMarker> {
        self.markers.iter()
    }

    /// Marker, dessen Kontrollpunkt getroffen wurde (zuletzt erstellter gewinnt).
    pub fn hit_control_point(
        &self,
        point: Vector2,
        layers: &[Layer],
        spec: &MarkerHandleSpec,
    ) -> Option<usize> {
        self.markers
            .iter()
            .rposition(|m| m.hits_control_point(point, layers, spec))
    }

    /// Marker, dessen Kreis getroffen wurde (zuletzt erstellter gewinnt).
    pub fn hit_body(&self, point: Vector2, layers: &[Layer]) -> Option<usize> {
        self.markers
            .iter()
            .rposition(|m| m.contains(point, layers))
    }

    /// Radius je Anker eines Layers; 0 wo kein Marker bindet.
    ///
    /// Bei mehreren Markern am selben Anker zählt der zuerst erstellte.
    /// Marker mit ungültigem Index werden ignoriert.
    pub fn radii_for_layer(&self, layer: LayerId, anchor_count: usize) -> Vec<f32> {
        let mut radii = vec![0.0; anchor_count];
        let mut assigned = vec![false; anchor_count];
        for marker in self.markers.iter().filter(|m| m.anchor.layer == layer) {
            let i = marker.anchor.index;
            if i < anchor_count && !assigned[i] {
                radii[i] = marker.radius;
                assigned[i] = true;
            }
        }
        radii
    }

    /// Entfernt alle Marker eines Layers; gibt die Anzahl entfernter Marker zurück.
    pub fn remove_layer(&mut self, layer: LayerId) -> usize {
        let before = self.markers.len();
        self.markers.retain(|m| m.anchor.layer != layer);
        before - self.markers.len()
    }
}
