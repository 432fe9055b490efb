//! UI-Komponenten: Toolbar, Layer-Panel, Status-Bar und Canvas-Adapter.

mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Die Panels erzeugen ausschließlich `AppIntent`s; der Canvas wird über
/// [`EguiRenderer`] gezeichnet und über [`CanvasInput`] abgefragt.
pub mod layer_panel;
pub mod painter;
pub mod status;
pub mod toolbar;

pub use input::CanvasInput;
pub use layer_panel::LayerPanel;
pub use painter::EguiRenderer;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
