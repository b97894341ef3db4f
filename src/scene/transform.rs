use cgmath::{Euler, Matrix4, Rad, Vector3};

/// Local transform of a scene node: translation, Euler rotation, scale.
///
/// Kept as separate components rather than a baked matrix so the update loop
/// can drive individual joint angles without decomposing anything. The matrix
/// is composed on demand as `T * Rz * Ry * Rx * S`.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Euler<Rad<f32>>,
    pub scale: Vector3<f32>,
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale)
    pub fn identity() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Euler::new(Rad(0.0), Rad(0.0), Rad(0.0)),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Transform with only a translation set
    pub fn from_position(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            ..Self::identity()
        }
    }

    /// Composes the local matrix for this transform
    pub fn matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let r = Matrix4::from_angle_z(self.rotation.z)
            * Matrix4::from_angle_y(self.rotation.y)
            * Matrix4::from_angle_x(self.rotation.x);
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
