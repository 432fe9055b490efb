//! Core-Domänentypen: Pfade, Layer, Radius-Marker, Längentabellen, Puls-Animation.

pub mod animation;
pub mod arc_length;
pub mod cubic_path;
pub mod error;
pub mod layer;
pub mod marker;
pub mod vector;

pub use animation::{
    interpolate_radius, pulse_frame, sample_pulses, total_frames, AnimationKind, PulseFrame,
    PulseSample, PulseSettings, MIN_VISIBLE_RADIUS, PULSE_SAMPLE_COUNT,
};
pub use arc_length::{cubic_bezier, ArcLengthTable, ANIMATION_STEP, OUTLINE_STEP};
pub use cubic_path::{Anchor, CubicPath, HandleKind, SegmentControls};
pub use error::{EditError, EditResult};
pub use layer::{next_layer_id, unique_layer_name, Layer, LayerId, LayerStack, LayerStore};
pub use marker::{AnchorRef, MarkerHandleSpec, MarkerSet, RadiusMarker};
pub use vector::{clamp_to_canvas, is_within_canvas, mirror_through, Vector2};
