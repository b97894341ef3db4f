//! World-space bounding boxes for the tracked rigid parts.
//!
//! Bounds live for exactly one tick: every [`BoundsTracker::refresh`] forces
//! a world-matrix propagation pass and rebuilds the whole snapshot, so the
//! boxes always reflect pose and movement mutations made earlier in the same
//! tick. Nothing here is mutated in place across frames.

use std::collections::HashMap;

use cgmath::{vec4, Matrix4, Vector3};

use crate::rig::RigError;
use crate::scene::{NodeId, Scene};

/// Axis-aligned box, world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Aabb {
    /// Box centered at the origin with the given half-extents
    pub fn from_half_extents(half: Vector3<f32>) -> Self {
        Self { min: -half, max: half }
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    /// Three-axis interval overlap test.
    ///
    /// Intervals are open: parts that merely share a face are not
    /// intersecting. Adjacent limbs rest flush against each other, so a
    /// closed test would fire on every structural contact.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Axis-aligned hull of this box transformed by `matrix`
    pub fn transformed(&self, matrix: &Matrix4<f32>) -> Aabb {
        let mut min = Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
        let mut max = -min;
        for &x in &[self.min.x, self.max.x] {
            for &y in &[self.min.y, self.max.y] {
                for &z in &[self.min.z, self.max.z] {
                    let corner = matrix * vec4(x, y, z, 1.0);
                    min.x = min.x.min(corner.x);
                    min.y = min.y.min(corner.y);
                    min.z = min.z.min(corner.z);
                    max.x = max.x.max(corner.x);
                    max.y = max.y.max(corner.y);
                    max.z = max.z.max(corner.z);
                }
            }
        }
        Aabb { min, max }
    }
}

/// Per-tick snapshot: part name to world-space box, fully rebuilt each refresh
pub type BoundsSnapshot = HashMap<String, Aabb>;

/// Knows which scene nodes are rigid parts worth bounding.
///
/// Registration happens once during rig construction; refreshing happens
/// every tick.
pub struct BoundsTracker {
    parts: Vec<(String, NodeId)>,
}

impl BoundsTracker {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Registers a shape-bearing node under a unique part name
    pub fn track(&mut self, scene: &Scene, name: &str, node: NodeId) -> Result<(), RigError> {
        if self.parts.iter().any(|(n, _)| n == name) {
            return Err(RigError::DuplicatePart(name.to_string()));
        }
        if scene.node(node).shape.is_none() {
            return Err(RigError::MissingShape(name.to_string()));
        }
        self.parts.push((name.to_string(), node));
        Ok(())
    }

    /// Number of tracked parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Rebuilds the snapshot from the current pose.
    ///
    /// Forces world-matrix propagation first; most of the graph's transforms
    /// were touched by the pose step earlier in the tick and the cached
    /// matrices would otherwise be stale.
    pub fn refresh(&self, scene: &mut Scene) -> BoundsSnapshot {
        scene.update_world_transforms();

        let mut snapshot = BoundsSnapshot::with_capacity(self.parts.len());
        for (name, id) in &self.parts {
            let node = scene.node(*id);
            let shape = node
                .shape
                .as_ref()
                .expect("tracked nodes are validated to carry a shape");
            let local = Aabb::from_half_extents(shape.half_extents());
            snapshot.insert(name.clone(), local.transformed(&node.world_matrix()));
        }
        snapshot
    }
}

impl Default for BoundsTracker {
    fn default() -> Self {
        Self::new()
    }
}
