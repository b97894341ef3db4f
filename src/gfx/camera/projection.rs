use cgmath::{ortho, perspective, Deg, Matrix4, Point3, Vector3};

/// Fixed vertical extent of the orthographic views, in world units
pub const FRUSTUM_SIZE: f32 = 80.0;

/// Vertical field of view of the perspective view
pub const DEFAULT_FOVY: Deg<f32> = Deg(70.0);

/// Projection kind for a [`Camera`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Symmetric orthographic frustum; horizontal extent follows the aspect
    Orthographic { frustum_size: f32 },
    Perspective { fovy: Deg<f32> },
}

/// A fixed viewpoint onto the scene.
///
/// Unlike an orbiting camera this one never moves on its own; the exercise
/// uses four of them at fixed positions and the only thing that ever changes
/// is the aspect ratio when the window resizes.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub projection: Projection,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Creates an orthographic camera looking at the origin
    pub fn orthographic(eye: Vector3<f32>, up: Vector3<f32>, aspect: f32) -> Self {
        Self {
            eye,
            target: Vector3::new(0.0, 0.0, 0.0),
            up,
            projection: Projection::Orthographic {
                frustum_size: FRUSTUM_SIZE,
            },
            aspect,
            znear: 1.0,
            zfar: 1000.0,
        }
    }

    /// Creates a perspective camera looking at the origin
    pub fn perspective(eye: Vector3<f32>, aspect: f32) -> Self {
        Self {
            eye,
            target: Vector3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            projection: Projection::Perspective { fovy: DEFAULT_FOVY },
            aspect,
            znear: 1.0,
            zfar: 1000.0,
        }
    }

    /// Updates the aspect ratio from new viewport dimensions.
    ///
    /// For orthographic cameras this moves the left/right planes to
    /// `±(frustum_size * aspect) / 2`; top/bottom stay at `±frustum_size / 2`.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Orthographic `(left, right, top, bottom)` planes, if applicable
    pub fn ortho_bounds(&self) -> Option<(f32, f32, f32, f32)> {
        match self.projection {
            Projection::Orthographic { frustum_size } => {
                let half_w = frustum_size * self.aspect / 2.0;
                let half_h = frustum_size / 2.0;
                Some((-half_w, half_w, half_h, -half_h))
            }
            Projection::Perspective { .. } => None,
        }
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::new(self.eye.x, self.eye.y, self.eye.z);
        let target = Point3::new(self.target.x, self.target.y, self.target.z);
        Matrix4::look_at_rh(eye, target, self.up)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        match self.projection {
            Projection::Orthographic { .. } => {
                let (left, right, top, bottom) = self
                    .ortho_bounds()
                    .expect("orthographic projection has bounds");
                ortho(left, right, bottom, top, self.znear, self.zfar)
            }
            Projection::Perspective { fovy } => {
                perspective(fovy, self.aspect, self.znear, self.zfar)
            }
        }
    }

    /// Combined view-projection matrix for the renderer
    pub fn view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }
}
