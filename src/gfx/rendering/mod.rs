//! # Rendering Seam
//!
//! The exercise treats the renderer as an external collaborator: it receives
//! the scene graph and the active camera once per tick and turns them into a
//! frame. Anything GPU-shaped lives behind the [`Renderer`] trait so the rig
//! and collision logic can be driven (and tested) without a device.

use crate::gfx::camera::Camera;
use crate::scene::Scene;

/// Frame-level toggles owned by the app shell
#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    /// Draw all rigid parts as wireframe (key `7`)
    pub wireframe: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { wireframe: false }
    }
}

/// Render collaborator: consumes the scene and a camera, produces a frame
pub trait Renderer {
    /// Called when the surface changes size
    fn resize(&mut self, width: u32, height: u32);

    /// Called once per tick after the simulation has updated the scene
    fn render_frame(&mut self, scene: &Scene, camera: &Camera, settings: &RenderSettings);
}

/// Renderer that draws nothing.
///
/// Used by tests and by the demo when no backend is plugged in; the tick
/// loop, pose updates, and collision checks all run exactly as they would
/// with a real renderer attached.
#[derive(Debug, Default)]
pub struct HeadlessRenderer;

impl Renderer for HeadlessRenderer {
    fn resize(&mut self, _width: u32, _height: u32) {}

    fn render_frame(&mut self, _scene: &Scene, _camera: &Camera, _settings: &RenderSettings) {}
}
