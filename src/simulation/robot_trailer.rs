//! # Robot & Trailer Exercise
//!
//! The update loop tying the rig together: held keys advance the pose, the
//! pose lands on the pivots, directional input moves the trailer (or the
//! welded pair once latched), bounds are rebuilt, and collisions checked.
//! Tick order matters and is spelled out in [`RobotTrailerSim::update`].
//!
//! ## Keybindings
//!
//! | Keys        | Action                              |
//! |-------------|-------------------------------------|
//! | `q` / `a`   | feet joint (theta1) +/-             |
//! | `w` / `s`   | leg joint (theta2) +/-              |
//! | `e` / `d`   | arm slide (delta1) +/-              |
//! | `r` / `f`   | head joint (theta3) +/-             |
//! | arrows      | move trailer (or coupled rig)       |

use anyhow::Result;
use cgmath::Vector3;

use crate::input::InputState;
use crate::rig::{BuiltRig, Pose, RigBuilder, RigHandles};
use crate::scene::Scene;

use super::bounds::BoundsTracker;
use super::collision::{Collision, CollisionDetector, PartPair};
use super::coupling::Coupling;
use super::traits::Simulation;

/// The distinguished hitch pair: this foot against the tow-bar linkage
const HITCH_FOOT: &str = "right_foot";
const HITCH_LINK: &str = "trailer_link";

struct RigParts {
    handles: RigHandles,
    tracker: BoundsTracker,
    detector: CollisionDetector,
}

/// The robot-and-trailer simulation
pub struct RobotTrailerSim {
    pose: Pose,
    coupling: Coupling,
    rig: Option<RigParts>,
    last_collisions: Vec<Collision>,
}

impl RobotTrailerSim {
    pub fn new() -> Self {
        Self {
            pose: Pose::resting(),
            coupling: Coupling::new(),
            rig: None,
            last_collisions: Vec::new(),
        }
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn is_latched(&self) -> bool {
        self.coupling.is_latched()
    }

    /// Collisions reported on the most recent tick
    pub fn last_collisions(&self) -> &[Collision] {
        &self.last_collisions
    }

    /// Pivot handles, once the rig has been built
    pub fn handles(&self) -> Option<&RigHandles> {
        self.rig.as_ref().map(|rig| &rig.handles)
    }
}

impl Default for RobotTrailerSim {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for RobotTrailerSim {
    fn initialize(&mut self, scene: &mut Scene) -> Result<()> {
        let BuiltRig {
            handles,
            tracker,
            allowed,
        } = RigBuilder::new(scene).build()?;

        log::info!(
            "robot and trailer rig built: {} tracked parts, {} allowed contacts",
            tracker.len(),
            allowed.len()
        );

        let detector = CollisionDetector::new(allowed, PartPair::new(HITCH_FOOT, HITCH_LINK));
        self.rig = Some(RigParts {
            handles,
            tracker,
            detector,
        });
        Ok(())
    }

    fn update(&mut self, input: &InputState, scene: &mut Scene) {
        let Some(rig) = self.rig.as_mut() else {
            return;
        };

        // 1. Held keys advance their joints; several can move at once.
        if input.is_held("q") {
            self.pose.feet.increase();
        }
        if input.is_held("a") {
            self.pose.feet.decrease();
        }
        if input.is_held("w") {
            self.pose.legs.increase();
        }
        if input.is_held("s") {
            self.pose.legs.decrease();
        }
        if input.is_held("e") {
            self.pose.arms.increase();
        }
        if input.is_held("d") {
            self.pose.arms.decrease();
        }
        if input.is_held("r") {
            self.pose.head.increase();
        }
        if input.is_held("f") {
            self.pose.head.decrease();
        }

        // Directional movement goes through the clamped offset joints, so
        // the play area has edges. Up on the screen is -Z.
        let (old_x, old_z) = (self.pose.trailer_x.value(), self.pose.trailer_z.value());
        if input.is_held("arrowright") {
            self.pose.trailer_x.increase();
        }
        if input.is_held("arrowleft") {
            self.pose.trailer_x.decrease();
        }
        if input.is_held("arrowdown") {
            self.pose.trailer_z.increase();
        }
        if input.is_held("arrowup") {
            self.pose.trailer_z.decrease();
        }
        let delta = Vector3::new(
            self.pose.trailer_x.value() - old_x,
            0.0,
            self.pose.trailer_z.value() - old_z,
        );

        // 2. Pose onto the pivots.
        rig.handles.apply_pose(&self.pose, scene);

        // 3. Movement: the trailer alone until latched, the welded pair after.
        scene.node_mut(rig.handles.trailer_root).transform.position += delta;
        if self.coupling.is_latched() {
            scene.node_mut(rig.handles.robot_root).transform.position += delta;
        }

        // 4. Bounds rebuilt every tick, after all of this tick's mutations.
        let mut bounds = rig.tracker.refresh(scene);

        // 5. Hitch pair first: its intersection feeds the latch, not reports.
        let snap = match (bounds.get(HITCH_FOOT), bounds.get(HITCH_LINK)) {
            (Some(foot), Some(link)) => self.coupling.observe(foot, link),
            _ => None,
        };
        if let Some(offset) = snap {
            scene.node_mut(rig.handles.trailer_root).transform.position += offset;
            // The snap moved the trailer; rebuild so this tick's reports see
            // where it actually landed.
            bounds = rig.tracker.refresh(scene);
        }

        // 6. Everything else is pairwise-tested and reported.
        self.last_collisions = rig.detector.check(&bounds);
    }

    fn name(&self) -> &str {
        "Robot & Trailer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::vec4;

    fn setup() -> (Scene, RobotTrailerSim) {
        let mut scene = Scene::new();
        let mut sim = RobotTrailerSim::new();
        sim.initialize(&mut scene).unwrap();
        (scene, sim)
    }

    fn root_positions(scene: &Scene, sim: &RobotTrailerSim) -> (Vector3<f32>, Vector3<f32>) {
        let handles = sim.handles().unwrap();
        (
            scene.node(handles.robot_root).transform.position,
            scene.node(handles.trailer_root).transform.position,
        )
    }

    /// Drives the trailer root to where the linkage either meets the
    /// designated foot or sits far away from it.
    fn place_trailer(scene: &mut Scene, sim: &RobotTrailerSim, at_foot: bool) {
        let trailer = sim.handles().unwrap().trailer_root;
        let z = if at_foot { -12.0 } else { -60.0 };
        scene.node_mut(trailer).transform.position = Vector3::new(3.0, -1.0, z);
    }

    #[test]
    fn test_rest_pose_reports_no_collisions() {
        let (mut scene, mut sim) = setup();
        sim.update(&InputState::new(), &mut scene);
        assert!(sim.last_collisions().is_empty());
    }

    #[test]
    fn test_resting_head_and_foot_are_disjoint() {
        let (mut scene, mut sim) = setup();
        let rig = sim.rig.as_ref().unwrap();
        let bounds = rig.tracker.refresh(&mut scene);
        assert!(!bounds["head"].intersects(&bounds["right_foot"]));
        sim.update(&InputState::new(), &mut scene);
    }

    #[test]
    fn test_held_key_advances_joint_every_tick() {
        let (mut scene, mut sim) = setup();
        let mut input = InputState::new();
        input.key_down("q");

        for _ in 0..3 {
            sim.update(&input, &mut scene);
        }
        assert!((sim.pose().feet.value() - 0.15).abs() < 1e-5);

        // The pose lands on the pivot, not just the joint value.
        let pivot = sim.handles().unwrap().foot_pivots[0];
        let rotation = scene.node(pivot).transform.rotation.x.0;
        assert!((rotation + 0.15).abs() < 1e-5);
    }

    #[test]
    fn test_trailer_moves_alone_before_latch() {
        let (mut scene, mut sim) = setup();
        let (robot_before, trailer_before) = root_positions(&scene, &sim);

        let mut input = InputState::new();
        input.key_down("arrowup");
        sim.update(&input, &mut scene);

        let (robot_after, trailer_after) = root_positions(&scene, &sim);
        assert_eq!(robot_after, robot_before);
        assert!((trailer_after.z - (trailer_before.z - 0.5)).abs() < 1e-5);
    }

    #[test]
    fn test_latch_needs_two_distinct_contacts() {
        let (mut scene, mut sim) = setup();
        let idle = InputState::new();

        place_trailer(&mut scene, &sim, true);
        sim.update(&idle, &mut scene);
        assert!(!sim.is_latched(), "first contact must only arm the counter");

        place_trailer(&mut scene, &sim, false);
        sim.update(&idle, &mut scene);
        assert!(!sim.is_latched());

        place_trailer(&mut scene, &sim, true);
        sim.update(&idle, &mut scene);
        assert!(sim.is_latched(), "second contact must latch");

        // Latch survives later non-intersecting ticks.
        place_trailer(&mut scene, &sim, false);
        sim.update(&idle, &mut scene);
        assert!(sim.is_latched());
    }

    #[test]
    fn test_coupled_movement_after_latch() {
        let (mut scene, mut sim) = setup();
        let idle = InputState::new();

        place_trailer(&mut scene, &sim, true);
        sim.update(&idle, &mut scene);
        place_trailer(&mut scene, &sim, false);
        sim.update(&idle, &mut scene);
        place_trailer(&mut scene, &sim, true);
        sim.update(&idle, &mut scene);
        assert!(sim.is_latched());

        let (robot_before, trailer_before) = root_positions(&scene, &sim);
        let mut input = InputState::new();
        input.key_down("arrowleft");
        sim.update(&input, &mut scene);

        let (robot_after, trailer_after) = root_positions(&scene, &sim);
        let robot_delta = robot_after - robot_before;
        let trailer_delta = trailer_after - trailer_before;
        assert!((robot_delta.x - (-0.5)).abs() < 1e-5);
        assert_eq!(robot_delta, trailer_delta);
    }

    #[test]
    fn test_latch_tick_reports_post_snap_overlaps() {
        let (mut scene, mut sim) = setup();
        let idle = InputState::new();

        place_trailer(&mut scene, &sim, true);
        sim.update(&idle, &mut scene);
        place_trailer(&mut scene, &sim, false);
        sim.update(&idle, &mut scene);

        // Second approach comes up well short; the snap drags the trailer
        // body forward into the feet, and that overlap must show up in the
        // same tick's reports, not the next one's.
        let trailer = sim.handles().unwrap().trailer_root;
        scene.node_mut(trailer).transform.position = Vector3::new(3.0, -1.0, -16.5);
        sim.update(&idle, &mut scene);
        assert!(sim.is_latched());

        assert!(sim.last_collisions().contains(&Collision {
            a: "right_foot".to_string(),
            b: "trailer_body".to_string(),
        }));
    }

    #[test]
    fn test_latch_snaps_linkage_to_foot() {
        let (mut scene, mut sim) = setup();
        let idle = InputState::new();

        place_trailer(&mut scene, &sim, true);
        sim.update(&idle, &mut scene);
        place_trailer(&mut scene, &sim, false);
        sim.update(&idle, &mut scene);

        // Second approach stops short by half a unit; the latch closes the gap.
        let trailer = sim.handles().unwrap().trailer_root;
        scene.node_mut(trailer).transform.position = Vector3::new(3.0, -1.0, -12.5);
        sim.update(&idle, &mut scene);
        assert!(sim.is_latched());

        scene.update_world_transforms();
        let link = scene.find("trailer_link").unwrap();
        let link_center = scene.node(link).world_matrix() * vec4(0.0, 0.0, 0.0, 1.0);
        // Foot center sits at (3, 1, 4) in the rest pose.
        assert!((link_center.x - 3.0).abs() < 1e-4);
        assert!((link_center.y - 1.0).abs() < 1e-4);
        assert!((link_center.z - 4.0).abs() < 1e-4);
    }
}
