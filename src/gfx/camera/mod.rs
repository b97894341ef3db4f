pub mod manager;
pub mod projection;

pub use manager::{CameraManager, CameraView};
pub use projection::{Camera, Projection, DEFAULT_FOVY, FRUSTUM_SIZE};
