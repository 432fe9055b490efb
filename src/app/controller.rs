//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Modus & View ===
            AppCommand::SetEditorMode { mode } => handlers::editing::set_editor_mode(state, mode),
            AppCommand::SetCanvasSize { size } => handlers::view::set_canvas_size(state, size),
            AppCommand::SetHoveredAnchor { anchor } => {
                handlers::view::set_hovered_anchor(state, anchor)
            }

            // === Bezier-Bearbeitung ===
            AppCommand::AddAnchor { pos } => handlers::editing::add_anchor(state, pos),
            AppCommand::BeginAnchorDrag { anchor } => {
                handlers::editing::begin_anchor_drag(state, anchor)
            }
            AppCommand::BeginHandleDrag { anchor, kind } => {
                handlers::editing::begin_handle_drag(state, anchor, kind)
            }
            AppCommand::MoveAnchor { anchor, delta } => {
                handlers::editing::move_anchor(state, anchor, delta)
            }
            AppCommand::MoveHandle { anchor, kind, pos } => {
                handlers::editing::move_handle(state, anchor, kind, pos)
            }
            AppCommand::ArmWholePathDrag { pos } => {
                handlers::editing::arm_whole_path_drag(state, pos)
            }
            AppCommand::TranslatePath { layer, delta, pos } => {
                handlers::editing::translate_path(state, layer, delta, pos)
            }
            AppCommand::RemoveSelectedAnchor => handlers::editing::remove_selected_anchor(state),
            AppCommand::EndDrag => handlers::editing::end_drag(state),

            // === Marker ===
            AppCommand::CreateMarker { anchor } => handlers::editing::create_marker(state, anchor),
            AppCommand::SelectMarker {
                index,
                drag_control_point,
            } => handlers::editing::select_marker(state, index, drag_control_point),
            AppCommand::ClearMarkerSelection => handlers::editing::clear_marker_selection(state),
            AppCommand::SetMarkerRadiusFromPointer { index, pos } => {
                handlers::editing::set_marker_radius(state, index, pos)
            }

            // === Wiedergabe ===
            AppCommand::TogglePlayback => handlers::playback::toggle(state),
            AppCommand::SetAnimationSpeed { seconds } => {
                handlers::playback::set_speed(state, seconds)
            }
            AppCommand::SetAnimationKind { kind } => handlers::playback::set_kind(state, kind),
            AppCommand::AdvanceFrame => handlers::playback::advance(state),

            // === Layer ===
            AppCommand::AddLayer => handlers::layers::add(state),
            AppCommand::RemoveLayer { index } => handlers::layers::remove(state, index),
            AppCommand::SelectLayer { index } => handlers::layers::select(state, index),
            AppCommand::ToggleLayerVisibility { index } => {
                handlers::layers::toggle_visibility(state, index)
            }
            AppCommand::RenameLayer { index, name } => {
                handlers::layers::rename(state, index, &name)
            }
            AppCommand::MoveLayer { from, to } => handlers::layers::reorder(state, from, to),
            AppCommand::UpdateLayerPath { index, path } => {
                handlers::layers::update_path(state, index, path)
            }

            // === Optionen ===
            AppCommand::SaveOptions => handlers::view::save_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
