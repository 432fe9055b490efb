//! Renderer, der alle Zeichenbefehle samt Stil aufzeichnet.
//!
//! Dient Headless-Betrieb und Tests als Ersatz für eine echte Zeichenfläche.

use super::{Renderer, Rgba};
use crate::core::Vector2;

/// Aktiver Zeichenstil zum Zeitpunkt eines Befehls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    pub stroke: Option<Rgba>,
    pub stroke_weight: f32,
    pub fill: Option<Rgba>,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            stroke: Some([0.0, 0.0, 0.0, 1.0]),
            stroke_weight: 1.0,
            fill: Some([1.0, 1.0, 1.0, 1.0]),
        }
    }
}

/// Ein aufgezeichneter Zeichenbefehl.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    Circle {
        center: Vector2,
        diameter: f32,
        style: DrawStyle,
    },
    Polyline {
        points: Vec<Vector2>,
        style: DrawStyle,
    },
    Line {
        from: Vector2,
        to: Vector2,
        style: DrawStyle,
    },
}

/// Zeichnet Befehle in eine Liste statt auf eine Fläche.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    style: DrawStyle,
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle bisher aufgezeichneten Befehle.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Entnimmt die Befehle und setzt den Stil zurück.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.style = DrawStyle::default();
        std::mem::take(&mut self.commands)
    }

    /// Alle Kreise als `(Mittelpunkt, Durchmesser, Stil)`.
    pub fn circles(&self) -> impl Iterator<Item = (Vector2, f32, DrawStyle)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                diameter,
                style,
            } => Some((*center, *diameter, *style)),
            _ => None,
        })
    }

    /// Anzahl der Linienzüge.
    pub fn polyline_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polyline { .. }))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_stroke_color(&mut self, color: Option<Rgba>) {
        self.style.stroke = color;
    }

    fn set_stroke_weight(&mut self, weight: f32) {
        self.style.stroke_weight = weight;
    }

    fn set_fill_color(&mut self, color: Option<Rgba>) {
        self.style.fill = color;
    }

    fn draw_circle(&mut self, center: Vector2, diameter: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            diameter,
            style: self.style,
        });
    }

    fn draw_polyline(&mut self, points: &[Vector2]) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            style: self.style,
        });
    }

    fn draw_line(&mut self, from: Vector2, to: Vector2) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            style: self.style,
        });
    }
}
