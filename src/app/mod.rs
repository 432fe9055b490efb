//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod input;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Layer, Marker, Modus, Wiedergabe).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use input::{collect_intents, EditorKey, InputFrame, InputSource};
pub use render_scene::build as build_render_scene;
pub use state::{AnimationState, AppState, EditorMode, EditorState, HitKind, HitTarget, ViewState};
