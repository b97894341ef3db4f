//! Core simulation trait.
//!
//! Defines the interface the app shell calls to run an exercise: build the
//! scene once, then advance one tick per frame from the current input state.

use crate::input::InputState;
use crate::scene::Scene;

/// A scene exercise driven by the tick loop
pub trait Simulation {
    /// Builds the simulation's scene content.
    ///
    /// Called once before the first tick. Errors are logged by the shell and
    /// the simulation is detached; the app keeps running.
    fn initialize(&mut self, scene: &mut Scene) -> anyhow::Result<()>;

    /// Advances the simulation by one tick.
    ///
    /// `input` reflects the keys held at the start of the tick. All scene
    /// mutation for the frame happens here, before the renderer sees it.
    fn update(&mut self, input: &InputState, scene: &mut Scene);

    /// Simulation name for logs and UI display
    fn name(&self) -> &str;
}
