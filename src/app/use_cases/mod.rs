//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod layers;
pub mod playback;
pub mod viewport;
