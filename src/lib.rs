// src/lib.rs
//! Trundle
//!
//! An articulated robot and trailer playground built on a retained scene graph.
//! Windowing and input come from winit; rendering is reached through a trait
//! seam so the core never touches a GPU.

pub mod app;
pub mod gfx;
pub mod input;
pub mod prelude;
pub mod rig;
pub mod scene;
pub mod simulation;

// Re-export main types for convenience
pub use app::TrundleApp;

/// Creates a default Trundle application instance
pub fn default() -> TrundleApp {
    TrundleApp::new()
}
