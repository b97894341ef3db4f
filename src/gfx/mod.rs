//! # Graphics Module
//!
//! Camera system and the renderer seam. The crate itself never rasterizes
//! anything: a [`rendering::Renderer`] implementation is handed the scene
//! graph and the active camera once per tick and produces the frame however
//! it likes. Camera projection math lives here because resize handling is
//! part of the exercise.

pub mod camera;
pub mod rendering;

// Re-export commonly used types
pub use camera::{Camera, CameraManager, CameraView};
pub use rendering::{HeadlessRenderer, RenderSettings, Renderer};
