use cgmath::Vector3;

/// Rigid-part shape descriptor: a category plus its dimensions.
///
/// Leaf nodes of the rig carry one of these so a renderer can mesh the part
/// and the bounds tracker can derive a local bounding box. Cylinders run
/// along local Y and spheres are centered at the node origin, matching the
/// conventions the rig builder positions parts with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned box with full side lengths
    Cuboid { x: f32, y: f32, z: f32 },
    /// Cylinder along local Y; `segments` is a meshing hint for the renderer
    Cylinder { radius: f32, height: f32, segments: u32 },
    Sphere { radius: f32 },
}

impl Shape {
    /// Half-extents of the local-space bounding box, centered on the node
    pub fn half_extents(&self) -> Vector3<f32> {
        match *self {
            Shape::Cuboid { x, y, z } => Vector3::new(x * 0.5, y * 0.5, z * 0.5),
            Shape::Cylinder { radius, height, .. } => {
                Vector3::new(radius, height * 0.5, radius)
            }
            Shape::Sphere { radius } => Vector3::new(radius, radius, radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_half_extents() {
        let he = Shape::Cuboid { x: 20.0, y: 10.0, z: 12.0 }.half_extents();
        assert_eq!(he, Vector3::new(10.0, 5.0, 6.0));
    }

    #[test]
    fn test_cylinder_half_extents_run_along_y() {
        let he = Shape::Cylinder { radius: 2.0, height: 2.0, segments: 16 }.half_extents();
        assert_eq!(he, Vector3::new(2.0, 1.0, 2.0));
    }
}
