//! Application State: zentrale Datenhaltung.

mod app_state;
mod editor;
mod playback;
mod view;

pub use app_state::AppState;
pub use editor::{EditorMode, EditorState, HitKind, HitTarget};
pub use playback::AnimationState;
pub use view::ViewState;
