//! Pulse-Path-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    collect_intents, AppCommand, AppController, AppIntent, AppState, EditorKey, EditorMode,
    InputFrame, InputSource, ViewState,
};
pub use core::{
    AnchorRef, AnimationKind, ArcLengthTable, CubicPath, EditError, Layer, LayerId, LayerStack,
    LayerStore, RadiusMarker, Vector2,
};
pub use render::{draw_scene, RecordingRenderer, Renderer};
pub use shared::{EditorOptions, RenderScene};
