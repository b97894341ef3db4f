//! # Trundle Prelude
//!
//! Convenient single import for typical applications:
//!
//! ```no_run
//! use trundle::prelude::*;
//!
//! let mut app = trundle::default();
//! app.attach_simulation(Box::new(RobotTrailerSim::new()));
//! app.run();
//! ```

// Re-export core application types
pub use crate::app::TrundleApp;
pub use crate::default;

// Re-export scene and camera types
pub use crate::gfx::camera::{Camera, CameraManager, CameraView};
pub use crate::gfx::rendering::{HeadlessRenderer, RenderSettings, Renderer};
pub use crate::scene::{Node, NodeId, Scene, Shape, Transform};

// Re-export the rig and simulation framework
pub use crate::input::InputState;
pub use crate::rig::{Joint, Pose, RigBuilder, RigHandles};
pub use crate::simulation::{RobotTrailerSim, Simulation};
