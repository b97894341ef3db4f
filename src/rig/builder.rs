//! One-time construction of the robot and trailer hierarchies.
//!
//! Mirrored assemblies (arms, legs) are built by a single factory taking a
//! `side` multiplier of +1 or -1 applied to every X offset, so left/right
//! symmetry comes from one piece of geometry logic. Dimensions follow the
//! coursework scene: a 20x10x12 torso, six-sided head cylinder, boxy limbs,
//! and a 32x12x20 trailer container with a tow-bar linkage.

use std::f32::consts::FRAC_PI_2;

use cgmath::Rad;

use crate::scene::{Node, NodeId, Scene, Shape, Transform};
use crate::simulation::bounds::BoundsTracker;
use crate::simulation::collision::AllowedPairSet;

use super::{pose::Pose, RigError};

/// Side multipliers for mirrored assemblies; index 0 is right (+X), 1 is left
pub const SIDES: [f32; 2] = [1.0, -1.0];

/// Robot spawn height: puts the soles of the feet on the ground plane
const ROBOT_SPAWN_Y: f32 = 35.0;

/// Shoulder pivot offset from the torso center, before the arm slide
const ARM_OFFSET_X: f32 = 12.0;

/// Trailer spawn: off to the side, yawed to face the robot
const TRAILER_SPAWN: (f32, f32, f32) = (-30.0, 0.0, 0.0);

/// Named handles to every pivot the update loop drives.
///
/// Array-valued handles are indexed like [`SIDES`]: 0 right, 1 left.
pub struct RigHandles {
    pub robot_root: NodeId,
    pub trailer_root: NodeId,
    pub head_pivot: NodeId,
    pub arm_pivots: [NodeId; 2],
    pub leg_pivots: [NodeId; 2],
    pub foot_pivots: [NodeId; 2],
}

impl RigHandles {
    /// Writes the current pose into the rig's local transforms.
    ///
    /// Joint values map onto pivots only; root positions are owned by the
    /// movement step of the update loop and are left untouched here.
    pub fn apply_pose(&self, pose: &Pose, scene: &mut Scene) {
        for (i, &side) in SIDES.iter().enumerate() {
            scene.node_mut(self.foot_pivots[i]).transform.rotation.x =
                Rad(-pose.feet.value());
            scene.node_mut(self.leg_pivots[i]).transform.rotation.x =
                Rad(pose.legs.value());
            // delta1 slides the whole arm assembly in toward the torso.
            scene.node_mut(self.arm_pivots[i]).transform.position.x =
                side * (ARM_OFFSET_X - pose.arms.value());
        }
        scene.node_mut(self.head_pivot).transform.rotation.x = Rad(pose.head.value());
    }
}

/// Everything the simulation needs after construction
pub struct BuiltRig {
    pub handles: RigHandles,
    pub tracker: BoundsTracker,
    pub allowed: AllowedPairSet,
}

/// Builds the robot and trailer into a scene, once.
pub struct RigBuilder<'a> {
    scene: &'a mut Scene,
    tracker: BoundsTracker,
}

impl<'a> RigBuilder<'a> {
    pub fn new(scene: &'a mut Scene) -> Self {
        Self {
            scene,
            tracker: BoundsTracker::new(),
        }
    }

    /// Constructs both hierarchies and returns handles, tracker, allow-list
    pub fn build(mut self) -> Result<BuiltRig, RigError> {
        let robot_root = self.scene.add_root(Node::group(
            "robot",
            Transform::from_position(0.0, ROBOT_SPAWN_Y, 0.0),
        ));

        self.tracked(
            robot_root,
            "torso",
            Transform::identity(),
            Shape::Cuboid { x: 20.0, y: 10.0, z: 12.0 },
        )?;

        let head_pivot = self.build_head(robot_root)?;

        let mut arm_pivots = [NodeId(0); 2];
        let mut leg_pivots = [NodeId(0); 2];
        let mut foot_pivots = [NodeId(0); 2];
        for (i, &side) in SIDES.iter().enumerate() {
            arm_pivots[i] = self.build_arm(robot_root, side)?;
            let (leg, foot) = self.build_leg(robot_root, side)?;
            leg_pivots[i] = leg;
            foot_pivots[i] = foot;
        }

        self.tracked(
            robot_root,
            "abdomen",
            Transform::from_position(0.0, -7.0, 0.0),
            Shape::Cuboid { x: 12.0, y: 4.0, z: 12.0 },
        )?;
        self.tracked(
            robot_root,
            "waist",
            Transform::from_position(0.0, -12.0, 0.0),
            Shape::Cuboid { x: 20.0, y: 6.0, z: 12.0 },
        )?;
        for &side in &SIDES {
            self.wheel(
                robot_root,
                &side_name(side, "waist_wheel"),
                Transform::from_position(11.0 * side, -12.0, 0.0),
            );
        }

        let trailer_root = self.build_trailer()?;

        Ok(BuiltRig {
            handles: RigHandles {
                robot_root,
                trailer_root,
                head_pivot,
                arm_pivots,
                leg_pivots,
                foot_pivots,
            },
            tracker: self.tracker,
            allowed: allowed_pairs(),
        })
    }

    fn build_head(&mut self, robot_root: NodeId) -> Result<NodeId, RigError> {
        let head_pivot = self
            .scene
            .add_child(robot_root, Node::group("head_pivot", Transform::from_position(0.0, 5.0, 0.0)));

        self.tracked(
            head_pivot,
            "head",
            Transform::from_position(0.0, 2.5, 0.0),
            Shape::Cylinder { radius: 2.5, height: 5.0, segments: 6 },
        )?;

        for &side in &SIDES {
            let mut eye = Transform::from_position(1.2 * side, 4.2, 1.8);
            eye.rotation.x = Rad(FRAC_PI_2);
            self.scene.add_child(
                head_pivot,
                Node::shape(
                    &side_name(side, "eye"),
                    eye,
                    Shape::Cylinder { radius: 0.5, height: 1.0, segments: 6 },
                ),
            );
            self.scene.add_child(
                head_pivot,
                Node::shape(
                    &side_name(side, "antenna"),
                    Transform::from_position(2.5 * side, 5.0, 0.0),
                    Shape::Cylinder { radius: 0.5, height: 2.5, segments: 6 },
                ),
            );
        }

        Ok(head_pivot)
    }

    /// Arm assembly: upper arm across the shoulder, two exhaust pipes, and a
    /// forearm hanging forward. The pivot carries the delta1 slide.
    fn build_arm(&mut self, robot_root: NodeId, side: f32) -> Result<NodeId, RigError> {
        let pivot = self.scene.add_child(
            robot_root,
            Node::group(
                &side_name(side, "arm"),
                Transform::from_position(ARM_OFFSET_X * side, 0.0, 0.0),
            ),
        );

        let mut upper = Transform::from_position(0.0, 0.0, -4.0);
        upper.rotation.z = Rad(FRAC_PI_2);
        self.tracked(
            pivot,
            &side_name(side, "upper_arm"),
            upper,
            Shape::Cuboid { x: 10.0, y: 4.0, z: 4.0 },
        )?;

        for (label, z) in [("exhaust_outer", -4.5), ("exhaust_inner", -3.5)] {
            self.scene.add_child(
                pivot,
                Node::shape(
                    &side_name(side, label),
                    Transform::from_position(2.5 * side, 4.0, z),
                    Shape::Cylinder { radius: 0.75, height: 10.0, segments: 6 },
                ),
            );
        }

        self.tracked(
            pivot,
            &side_name(side, "forearm"),
            Transform::from_position(0.0, -7.0, 3.0),
            Shape::Cuboid { x: 4.0, y: 4.0, z: 10.0 },
        )?;

        Ok(pivot)
    }

    /// Leg assembly: thigh, shin, two wheels, and a foot on its own pivot so
    /// theta1 and theta2 articulate independently.
    fn build_leg(&mut self, robot_root: NodeId, side: f32) -> Result<(NodeId, NodeId), RigError> {
        let pivot = self.scene.add_child(
            robot_root,
            Node::group(
                &side_name(side, "leg"),
                Transform::from_position(0.0, -15.0, 0.0),
            ),
        );

        self.tracked(
            pivot,
            &side_name(side, "thigh"),
            Transform::from_position(3.0 * side, -2.0, 0.0),
            Shape::Cuboid { x: 3.0, y: 4.0, z: 3.0 },
        )?;
        self.tracked(
            pivot,
            &side_name(side, "shin"),
            Transform::from_position(3.0 * side, -12.0, 0.0),
            Shape::Cuboid { x: 4.0, y: 16.0, z: 4.0 },
        )?;

        for (label, y) in [("leg_wheel_upper", -12.0), ("leg_wheel_lower", -17.0)] {
            self.wheel(
                pivot,
                &side_name(side, label),
                Transform::from_position(5.5 * side, y, 0.0),
            );
        }

        let foot_pivot = self.scene.add_child(
            pivot,
            Node::group(
                &side_name(side, "foot_pivot"),
                Transform::from_position(3.0 * side, -18.0, 0.0),
            ),
        );
        self.tracked(
            foot_pivot,
            &side_name(side, "foot"),
            Transform::from_position(0.0, -1.0, 4.0),
            Shape::Cuboid { x: 4.0, y: 2.0, z: 4.0 },
        )?;

        Ok((pivot, foot_pivot))
    }

    fn build_trailer(&mut self) -> Result<NodeId, RigError> {
        let (x, y, z) = TRAILER_SPAWN;
        let mut root_transform = Transform::from_position(x, y, z);
        root_transform.rotation.y = Rad(FRAC_PI_2);
        let root = self.scene.add_root(Node::group("trailer", root_transform));

        self.tracked(
            root,
            "trailer_body",
            Transform::from_position(0.0, 6.0, 0.0),
            Shape::Cuboid { x: 32.0, y: 12.0, z: 20.0 },
        )?;
        self.tracked(
            root,
            "trailer_link",
            Transform::from_position(-16.0, 2.0, 0.0),
            Shape::Cuboid { x: 6.0, y: 2.0, z: 2.0 },
        )?;

        for (i, &(wx, wz)) in [(12.0, 8.0), (12.0, -8.0), (8.0, 8.0), (8.0, -8.0)]
            .iter()
            .enumerate()
        {
            let mut wheel = Transform::from_position(wx, -2.0, wz);
            wheel.rotation.z = Rad(FRAC_PI_2);
            wheel.rotation.y = Rad(FRAC_PI_2);
            self.scene.add_child(
                root,
                Node::shape(
                    &format!("trailer_wheel_{}", i),
                    wheel,
                    Shape::Cylinder { radius: 2.0, height: 2.0, segments: 16 },
                ),
            );
        }

        Ok(root)
    }

    /// Adds a shape node and registers it with the bounds tracker
    fn tracked(
        &mut self,
        parent: NodeId,
        name: &str,
        transform: Transform,
        shape: Shape,
    ) -> Result<NodeId, RigError> {
        let id = self.scene.add_child(parent, Node::shape(name, transform, shape));
        self.tracker.track(self.scene, name, id)?;
        Ok(id)
    }

    /// Adds an untracked ground wheel (decorative as far as bounding goes)
    fn wheel(&mut self, parent: NodeId, name: &str, mut transform: Transform) -> NodeId {
        transform.rotation.z = Rad(FRAC_PI_2);
        self.scene.add_child(
            parent,
            Node::shape(
                name,
                transform,
                Shape::Cylinder { radius: 2.0, height: 2.0, segments: 16 },
            ),
        )
    }
}

/// Structurally-expected overlaps between adjacent parts.
///
/// These pairs touch or interpenetrate by construction (a folded head dips
/// into the torso, a retracted arm slides through it) and must never show up
/// in collision reports.
fn allowed_pairs() -> AllowedPairSet {
    let mut allowed = AllowedPairSet::new();
    allowed.insert("torso", "head");
    allowed.insert("torso", "abdomen");
    allowed.insert("abdomen", "waist");
    allowed.insert("trailer_body", "trailer_link");
    for &side in &SIDES {
        allowed.insert("torso", &side_name(side, "upper_arm"));
        allowed.insert("torso", &side_name(side, "forearm"));
        allowed.insert(&side_name(side, "upper_arm"), &side_name(side, "forearm"));
        allowed.insert("waist", &side_name(side, "thigh"));
        allowed.insert(&side_name(side, "thigh"), &side_name(side, "shin"));
        allowed.insert(&side_name(side, "shin"), &side_name(side, "foot"));
    }
    allowed
}

fn side_name(side: f32, part: &str) -> String {
    if side > 0.0 {
        format!("right_{}", part)
    } else {
        format!("left_{}", part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::vec4;

    fn build() -> (Scene, BuiltRig) {
        let mut scene = Scene::new();
        let rig = RigBuilder::new(&mut scene).build().unwrap();
        (scene, rig)
    }

    fn world_position(scene: &Scene, id: NodeId) -> cgmath::Vector4<f32> {
        scene.node(id).world_matrix() * vec4(0.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_mirrored_parts_negate_x_only() {
        let (mut scene, rig) = build();
        scene.update_world_transforms();

        for (right, left) in [
            (rig.handles.foot_pivots[0], rig.handles.foot_pivots[1]),
            (rig.handles.arm_pivots[0], rig.handles.arm_pivots[1]),
        ] {
            let r = world_position(&scene, right);
            let l = world_position(&scene, left);
            assert!((r.x + l.x).abs() < 1e-5, "x offsets must negate");
            assert!((r.y - l.y).abs() < 1e-5, "y offsets must match");
            assert!((r.z - l.z).abs() < 1e-5, "z offsets must match");
        }
    }

    #[test]
    fn test_mirrored_shapes_match() {
        let (scene, _) = build();
        let right = scene.find("right_upper_arm").unwrap();
        let left = scene.find("left_upper_arm").unwrap();
        assert_eq!(scene.node(right).shape, scene.node(left).shape);
    }

    #[test]
    fn test_every_driven_pivot_is_a_group() {
        let (scene, rig) = build();
        let pivots = [
            rig.handles.head_pivot,
            rig.handles.arm_pivots[0],
            rig.handles.arm_pivots[1],
            rig.handles.leg_pivots[0],
            rig.handles.leg_pivots[1],
            rig.handles.foot_pivots[0],
            rig.handles.foot_pivots[1],
        ];
        for pivot in pivots {
            assert!(scene.node(pivot).shape.is_none());
            assert!(!scene.node(pivot).children().is_empty());
        }
    }

    #[test]
    fn test_arm_slide_moves_pivot_inward() {
        let (mut scene, rig) = build();
        let mut pose = Pose::resting();
        for _ in 0..10 {
            pose.arms.increase();
        }
        rig.handles.apply_pose(&pose, &mut scene);

        let right = scene.node(rig.handles.arm_pivots[0]).transform.position.x;
        let left = scene.node(rig.handles.arm_pivots[1]).transform.position.x;
        assert!((right - (ARM_OFFSET_X - 1.0)).abs() < 1e-5);
        assert!((left + (ARM_OFFSET_X - 1.0)).abs() < 1e-5);
    }

    #[test]
    fn test_allow_list_covers_adjacent_contacts() {
        let (_, rig) = build();
        assert!(rig.allowed.contains("head", "torso"));
        assert!(rig.allowed.contains("right_shin", "right_foot"));
        assert!(rig.allowed.contains("trailer_link", "trailer_body"));
        assert!(!rig.allowed.contains("head", "right_foot"));
    }
}
