//! Pulse-Path-Editor.
//!
//! Interaktiver Editor für kubische Bézier-Pfade mit Radius-Markern
//! und animierter Puls-Vorschau, gebaut mit egui + eframe.

use eframe::egui;
use pulse_path_editor::{
    collect_intents, render, ui, AppController, AppIntent, AppState, EditorOptions,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Pulse-Path-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Pulse-Path-Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Pulse-Path-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::CanvasInput,
    layer_panel: ui::LayerPanel,
    /// Noch nicht in Frame-Ticks umgesetzte Zeit in Sekunden
    tick_accumulator: f32,
}

/// Obergrenze der Frame-Ticks pro egui-Update (nach Hängern nicht aufholen)
const MAX_TICKS_PER_UPDATE: u32 = 4;

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::CanvasInput::new(),
            layer_panel: ui::LayerPanel::new(),
            tick_accumulator: 0.0,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = self.collect_panel_events(ctx);

        let has_meaningful_events = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let input = self.input.capture(ui, &response);
                events.extend(collect_intents(&input, self.state.view.canvas_size));
                events.extend(self.frame_ticks(ctx));

                let has_meaningful_events = events
                    .iter()
                    .any(|e| !matches!(e, AppIntent::FrameTick));
                self.process_events(std::mem::take(&mut events));

                let scene = self.controller.build_render_scene(&self.state);
                let painter = ui.painter_at(rect);
                let mut renderer = ui::EguiRenderer::new(&painter, rect.min);
                render::draw_scene(&mut renderer, &scene);

                if !scene.has_content() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Klicken, um Anker zu setzen",
                        egui::FontId::proportional(20.0),
                        egui::Color32::GRAY,
                    );
                }

                has_meaningful_events
            })
            .inner;

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_panel_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(self.layer_panel.show(ctx, &self.state));

        events
    }

    /// Setzt vergangene Zeit in Frame-Ticks zur konfigurierten Bildrate um.
    fn frame_ticks(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        if !self.state.animation.is_playing {
            self.tick_accumulator = 0.0;
            return Vec::new();
        }

        let frame_duration = 1.0 / self.state.options.frames_per_second.max(1) as f32;
        self.tick_accumulator += ctx.input(|i| i.stable_dt);
        let due = (self.tick_accumulator / frame_duration).floor();
        self.tick_accumulator -= due * frame_duration;

        let count = (due as u32).min(MAX_TICKS_PER_UPDATE);
        (0..count).map(|_| AppIntent::FrameTick).collect()
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if self.state.animation.is_playing {
            let fps = self.state.options.frames_per_second.max(1) as f32;
            ctx.request_repaint_after(std::time::Duration::from_secs_f32(1.0 / fps));
        } else if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
