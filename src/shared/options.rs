//! Zentrale Konfiguration für den Pulse-Path-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{MarkerHandleSpec, PulseSettings};
use serde::{Deserialize, Serialize};

// ── Animation ───────────────────────────────────────────────────────

/// Frames pro Sekunde der Wiedergabe.
pub const FRAMES_PER_SECOND: u32 = 60;
/// Standard-Dauer eines (Halb-)Zyklus in Sekunden.
pub const ANIMATION_SPEED_DEFAULT: f32 = 1.0;
/// Kleinste einstellbare Zyklusdauer.
pub const ANIMATION_SPEED_MIN: f32 = 0.1;
/// Größte einstellbare Zyklusdauer.
pub const ANIMATION_SPEED_MAX: f32 = 5.0;
/// Rasterung des Speed-Reglers.
pub const ANIMATION_SPEED_STEP: f32 = 0.1;

// ── Treffer-Radien ──────────────────────────────────────────────────

/// Trefferradius für Anker im Bezier-Modus (und Hover).
pub const ANCHOR_HIT_RADIUS: f32 = 10.0;
/// Trefferradius für Handles im Bezier-Modus.
pub const HANDLE_HIT_RADIUS: f32 = 8.0;
/// Trefferradius für Anker beim Anlegen eines Markers.
pub const MARKER_ANCHOR_HIT_RADIUS: f32 = 8.0;

// ── Marker ──────────────────────────────────────────────────────────

/// Radius neu erstellter Marker.
pub const DEFAULT_MARKER_RADIUS: f32 = 30.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Hintergrund (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Kontur des Pfads (RGBA: Grün).
pub const OUTLINE_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Verbindungslinien Anker → Handle (RGBA: Grau).
pub const HANDLE_LINE_COLOR: [f32; 4] = [0.706, 0.706, 0.706, 1.0];
/// Füllung der Handle-Punkte (RGBA: Cyan).
pub const HANDLE_DOT_COLOR: [f32; 4] = [0.298, 0.788, 0.941, 1.0];
/// Kontur der Anker-Punkte (RGBA: Weiß).
pub const ANCHOR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Füllung hervorgehobener Anker (RGBA: Pink).
pub const ANCHOR_HIGHLIGHT_COLOR: [f32; 4] = [1.0, 0.0, 0.431, 1.0];
/// Marker-Kreis (RGBA: Rot).
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Selektierter Marker-Kreis (RGBA: Bernstein).
pub const MARKER_SELECTED_COLOR: [f32; 4] = [1.0, 0.718, 0.012, 1.0];
/// Radius-Kontrollpunkt (RGBA: Blau).
pub const CONTROL_POINT_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Puls-Kreise (RGBA: Weiß).
pub const PULSE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `pulse_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Animation ───────────────────────────────────────────────
    /// Frames pro Sekunde
    pub frames_per_second: u32,
    /// Start-Zyklusdauer in Sekunden
    pub animation_speed_default: f32,
    /// Untergrenze des Speed-Reglers
    pub animation_speed_min: f32,
    /// Obergrenze des Speed-Reglers
    pub animation_speed_max: f32,
    /// Rasterung des Speed-Reglers
    pub animation_speed_step: f32,
    /// Parameter-Schrittweite für die Kontur
    pub outline_step: f32,
    /// Parameter-Schrittweite für das Puls-Sampling
    pub animation_step: f32,
    /// Anzahl der Puls-Samples entlang des Pfads
    pub pulse_sample_count: usize,
    /// Sichtbarkeitsschwelle für Puls-Radien
    pub min_visible_radius: f32,

    // ── Treffer-Radien ──────────────────────────────────────────
    /// Anker-Trefferradius (Bezier-Modus, Hover)
    pub anchor_hit_radius: f32,
    /// Handle-Trefferradius (Bezier-Modus)
    pub handle_hit_radius: f32,
    /// Anker-Trefferradius beim Anlegen eines Markers
    pub marker_anchor_hit_radius: f32,

    // ── Marker ──────────────────────────────────────────────────
    /// Radius neu erstellter Marker
    pub default_marker_radius: f32,
    /// Untergrenze beim Radius-Drag
    pub marker_radius_min: f32,
    /// Obergrenze beim Radius-Drag
    pub marker_radius_max: f32,
    /// Abstand des Kontrollpunkts vom rechten Kreisrand
    pub control_point_inset: f32,
    /// Trefferradius des Kontrollpunkts
    pub control_point_hit_radius: f32,

    // ── Farben ──────────────────────────────────────────────────
    pub background_color: [f32; 4],
    pub outline_color: [f32; 4],
    pub handle_line_color: [f32; 4],
    pub handle_dot_color: [f32; 4],
    pub anchor_color: [f32; 4],
    pub anchor_highlight_color: [f32; 4],
    pub marker_color: [f32; 4],
    pub marker_selected_color: [f32; 4],
    pub control_point_color: [f32; 4],
    pub pulse_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        let handle = MarkerHandleSpec::default();
        let pulse = PulseSettings::default();
        Self {
            frames_per_second: FRAMES_PER_SECOND,
            animation_speed_default: ANIMATION_SPEED_DEFAULT,
            animation_speed_min: ANIMATION_SPEED_MIN,
            animation_speed_max: ANIMATION_SPEED_MAX,
            animation_speed_step: ANIMATION_SPEED_STEP,
            outline_step: crate::core::OUTLINE_STEP,
            animation_step: pulse.step,
            pulse_sample_count: pulse.sample_count,
            min_visible_radius: pulse.min_visible_radius,

            anchor_hit_radius: ANCHOR_HIT_RADIUS,
            handle_hit_radius: HANDLE_HIT_RADIUS,
            marker_anchor_hit_radius: MARKER_ANCHOR_HIT_RADIUS,

            default_marker_radius: DEFAULT_MARKER_RADIUS,
            marker_radius_min: handle.radius_min,
            marker_radius_max: handle.radius_max,
            control_point_inset: handle.inset,
            control_point_hit_radius: handle.hit_radius,

            background_color: BACKGROUND_COLOR,
            outline_color: OUTLINE_COLOR,
            handle_line_color: HANDLE_LINE_COLOR,
            handle_dot_color: HANDLE_DOT_COLOR,
            anchor_color: ANCHOR_COLOR,
            anchor_highlight_color: ANCHOR_HIGHLIGHT_COLOR,
            marker_color: MARKER_COLOR,
            marker_selected_color: MARKER_SELECTED_COLOR,
            control_point_color: CONTROL_POINT_COLOR,
            pulse_color: PULSE_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("pulse_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pulse_path_editor.toml")
    }

    /// Geometrie des Marker-Kontrollpunkts aus den Optionen.
    pub fn marker_handle_spec(&self) -> MarkerHandleSpec {
        MarkerHandleSpec {
            inset: self.control_point_inset,
            hit_radius: self.control_point_hit_radius,
            radius_min: self.marker_radius_min,
            radius_max: self.marker_radius_max,
        }
    }

    /// Sampling-Parameter der Puls-Vorschau.
    pub fn pulse_settings(&self) -> PulseSettings {
        PulseSettings {
            step: self.animation_step,
            sample_count: self.pulse_sample_count,
            min_visible_radius: self.min_visible_radius,
        }
    }

    /// Begrenzt eine Zyklusdauer auf den Regler-Bereich und rastet sie ein.
    pub fn snap_animation_speed(&self, speed: f32) -> f32 {
        let clamped = if speed.is_finite() {
            speed.clamp(self.animation_speed_min, self.animation_speed_max)
        } else {
            self.animation_speed_default
        };
        if self.animation_speed_step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.animation_speed_min) / self.animation_speed_step).round();
        (self.animation_speed_min + steps * self.animation_speed_step)
            .clamp(self.animation_speed_min, self.animation_speed_max)
    }
}
