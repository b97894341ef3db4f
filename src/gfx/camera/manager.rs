use cgmath::Vector3;

use super::projection::Camera;

/// The four viewpoints of the exercise, selected with keys `1`-`4`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraView {
    Front,
    Side,
    Top,
    Perspective,
}

impl CameraView {
    /// Maps a key identifier to a view, if it is a camera key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "1" => Some(CameraView::Front),
            "2" => Some(CameraView::Side),
            "3" => Some(CameraView::Top),
            "4" => Some(CameraView::Perspective),
            _ => None,
        }
    }
}

/// Owns the fixed camera set and tracks which one is active.
///
/// Front looks down +Z, side down +X, top down +Y (all orthographic), and
/// the perspective camera sits above the scene diagonal. The perspective
/// view is active at startup.
pub struct CameraManager {
    front: Camera,
    side: Camera,
    top: Camera,
    perspective: Camera,
    active: CameraView,
}

impl CameraManager {
    pub fn new(aspect: f32) -> Self {
        let y_up = Vector3::new(0.0, 1.0, 0.0);
        Self {
            front: Camera::orthographic(Vector3::new(0.0, 0.0, 50.0), y_up, aspect),
            side: Camera::orthographic(Vector3::new(50.0, 0.0, 0.0), y_up, aspect),
            // Looking straight down; up picks the screen-space orientation.
            top: Camera::orthographic(
                Vector3::new(0.0, 50.0, 0.0),
                Vector3::new(0.0, 0.0, -1.0),
                aspect,
            ),
            perspective: Camera::perspective(Vector3::new(50.0, 50.0, 50.0), aspect),
            active: CameraView::Perspective,
        }
    }

    pub fn active_view(&self) -> CameraView {
        self.active
    }

    pub fn active(&self) -> &Camera {
        self.camera(self.active)
    }

    pub fn camera(&self, view: CameraView) -> &Camera {
        match view {
            CameraView::Front => &self.front,
            CameraView::Side => &self.side,
            CameraView::Top => &self.top,
            CameraView::Perspective => &self.perspective,
        }
    }

    pub fn select(&mut self, view: CameraView) {
        if self.active != view {
            log::debug!("camera switched to {:?}", view);
            self.active = view;
        }
    }

    /// Propagates new viewport dimensions to every camera
    pub fn resize_all(&mut self, width: u32, height: u32) {
        self.front.resize(width, height);
        self.side.resize(width, height);
        self.top.resize(width, height);
        self.perspective.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::projection::FRUSTUM_SIZE;

    #[test]
    fn test_perspective_active_at_startup() {
        let manager = CameraManager::new(1.0);
        assert_eq!(manager.active_view(), CameraView::Perspective);
    }

    #[test]
    fn test_camera_keys() {
        assert_eq!(CameraView::from_key("1"), Some(CameraView::Front));
        assert_eq!(CameraView::from_key("4"), Some(CameraView::Perspective));
        assert_eq!(CameraView::from_key("7"), None);
    }

    #[test]
    fn test_resize_reaches_every_camera() {
        let mut manager = CameraManager::new(1.0);
        manager.resize_all(1600, 900);

        let aspect = 1600.0 / 900.0;
        for view in [CameraView::Front, CameraView::Side, CameraView::Top] {
            let (left, right, _, _) = manager.camera(view).ortho_bounds().unwrap();
            assert!((right - FRUSTUM_SIZE * aspect / 2.0).abs() < 1e-4);
            assert!((left + FRUSTUM_SIZE * aspect / 2.0).abs() < 1e-4);
        }
        let persp = manager.camera(CameraView::Perspective);
        assert!((persp.aspect - aspect).abs() < 1e-6);
    }
}
