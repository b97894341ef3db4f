//! # Scene Management Module
//!
//! Retained scene graph for the rig: an arena of [`Node`]s addressed by
//! [`NodeId`], each with a local [`Transform`] and an optional [`Shape`]
//! descriptor on leaves. World matrices are cached per node and refreshed by
//! [`Scene::update_world_transforms`], which walks parent chains top-down.
//!
//! ## Usage
//!
//! ```no_run
//! use trundle::scene::{Scene, Node, Transform, Shape};
//!
//! let mut scene = Scene::new();
//! let root = scene.add_root(Node::group("robot", Transform::identity()));
//! let torso = scene.add_child(root, Node::shape(
//!     "torso",
//!     Transform::identity(),
//!     Shape::Cuboid { x: 20.0, y: 10.0, z: 12.0 },
//! ));
//! scene.update_world_transforms();
//! let _world = scene.node(torso).world_matrix();
//! ```

pub mod node;
pub mod shape;
pub mod transform;

// Re-export main types
pub use node::{Node, NodeId};
pub use shape::Shape;
pub use transform::Transform;

use cgmath::{Matrix4, SquareMatrix};

/// Arena-backed scene graph
pub struct Scene {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Scene {
    /// Creates an empty scene
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Inserts a node with no parent and returns its handle
    pub fn add_root(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.roots.push(id);
        id
    }

    /// Inserts a node under `parent` and returns its handle
    pub fn add_child(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Finds a node by name (first match in insertion order)
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.name == name)
            .map(NodeId)
    }

    /// Root handles in insertion order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Total number of nodes in the arena
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over every node paired with its handle
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Recomputes every cached world matrix from the current local transforms.
    ///
    /// Runs top-down from the roots so each node sees its parent's already
    /// refreshed matrix. Call this before reading [`Node::world_matrix`]; the
    /// bounds tracker calls it at the start of every refresh.
    pub fn update_world_transforms(&mut self) {
        let mut stack: Vec<(NodeId, Matrix4<f32>)> = self
            .roots
            .iter()
            .map(|&id| (id, Matrix4::identity()))
            .collect();

        while let Some((id, parent_world)) = stack.pop() {
            let world = parent_world * self.nodes[id.0].transform.matrix();
            self.nodes[id.0].world = world;
            for &child in &self.nodes[id.0].children {
                stack.push((child, world));
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{vec4, Rad};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_world_transform_composes_parent_chain() {
        let mut scene = Scene::new();
        let root = scene.add_root(Node::group("root", Transform::from_position(10.0, 0.0, 0.0)));
        let pivot = scene.add_child(root, Node::group("pivot", Transform::from_position(0.0, 5.0, 0.0)));
        let leaf = scene.add_child(
            pivot,
            Node::shape(
                "leaf",
                Transform::from_position(0.0, 0.0, 2.0),
                Shape::Sphere { radius: 1.0 },
            ),
        );

        scene.update_world_transforms();

        let p = scene.node(leaf).world_matrix() * vec4(0.0, 0.0, 0.0, 1.0);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 5.0).abs() < 1e-5);
        assert!((p.z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_pivot_rotation_carries_children() {
        let mut scene = Scene::new();
        let pivot = scene.add_root(Node::group("pivot", Transform::identity()));
        let leaf = scene.add_child(
            pivot,
            Node::group("leaf", Transform::from_position(1.0, 0.0, 0.0)),
        );

        scene.node_mut(pivot).transform.rotation.z = Rad(FRAC_PI_2);
        scene.update_world_transforms();

        // A quarter turn about Z swings local +X onto +Y.
        let p = scene.node(leaf).world_matrix() * vec4(0.0, 0.0, 0.0, 1.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_find_by_name() {
        let mut scene = Scene::new();
        let root = scene.add_root(Node::group("root", Transform::identity()));
        let child = scene.add_child(root, Node::group("child", Transform::identity()));

        assert_eq!(scene.find("child"), Some(child));
        assert_eq!(scene.find("missing"), None);
    }
}
