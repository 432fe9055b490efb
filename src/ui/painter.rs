//! Renderer-Adapter auf einen `egui::Painter`.
//!
//! Canvas-Koordinaten (Ursprung oben links im Canvas) werden um den
//! Ursprung des Canvas-Rechtecks verschoben.

use crate::core::Vector2;
use crate::render::{Renderer, Rgba};

fn to_color32(color: Rgba) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

/// Zeichnet über einen auf den Canvas beschnittenen `egui::Painter`.
pub struct EguiRenderer<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    stroke: Option<egui::Color32>,
    stroke_weight: f32,
    fill: Option<egui::Color32>,
}

impl<'a> EguiRenderer<'a> {
    /// Erstellt den Adapter; `origin` ist die obere linke Canvas-Ecke in Bildschirmkoordinaten.
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self {
            painter,
            origin,
            stroke: Some(egui::Color32::BLACK),
            stroke_weight: 1.0,
            fill: Some(egui::Color32::WHITE),
        }
    }

    fn to_screen(&self, point: Vector2) -> egui::Pos2 {
        egui::pos2(self.origin.x + point.x, self.origin.y + point.y)
    }

    fn current_stroke(&self) -> egui::Stroke {
        match self.stroke {
            Some(color) => egui::Stroke::new(self.stroke_weight, color),
            None => egui::Stroke::NONE,
        }
    }
}

impl Renderer for EguiRenderer<'_> {
    fn clear(&mut self, color: Rgba) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, to_color32(color));
    }

    fn set_stroke_color(&mut self, color: Option<Rgba>) {
        self.stroke = color.map(to_color32);
    }

    fn set_stroke_weight(&mut self, weight: f32) {
        self.stroke_weight = weight;
    }

    fn set_fill_color(&mut self, color: Option<Rgba>) {
        self.fill = color.map(to_color32);
    }

    fn draw_circle(&mut self, center: Vector2, diameter: f32) {
        let fill = self.fill.unwrap_or(egui::Color32::TRANSPARENT);
        self.painter.circle(
            self.to_screen(center),
            diameter * 0.5,
            fill,
            self.current_stroke(),
        );
    }

    fn draw_polyline(&mut self, points: &[Vector2]) {
        if points.len() < 2 || self.stroke.is_none() {
            return;
        }
        let screen: Vec<egui::Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        self.painter
            .add(egui::Shape::line(screen, self.current_stroke()));
    }

    fn draw_line(&mut self, from: Vector2, to: Vector2) {
        if self.stroke.is_none() {
            return;
        }
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            self.current_stroke(),
        );
    }
}
