use cgmath::{Matrix4, SquareMatrix};

use super::{shape::Shape, transform::Transform};

/// Handle to a node in the scene arena.
///
/// Stays valid for the lifetime of the scene; nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A node in the retained scene graph.
///
/// Group nodes (pivots) carry no shape and exist purely to rotate or
/// translate their children as a unit. Leaf nodes own a [`Shape`] descriptor
/// for rendering and bounding.
pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub shape: Option<Shape>,
    pub visible: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) world: Matrix4<f32>,
}

impl Node {
    /// Creates a shapeless group node (a pivot)
    pub fn group(name: &str, transform: Transform) -> Self {
        Self {
            name: name.to_string(),
            transform,
            shape: None,
            visible: true,
            parent: None,
            children: Vec::new(),
            world: Matrix4::identity(),
        }
    }

    /// Creates a leaf node carrying a rigid-part shape
    pub fn shape(name: &str, transform: Transform, shape: Shape) -> Self {
        Self {
            shape: Some(shape),
            ..Self::group(name, transform)
        }
    }

    /// World matrix as of the last propagation pass
    pub fn world_matrix(&self) -> Matrix4<f32> {
        self.world
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
