//! # Simulation Module
//!
//! The per-tick machinery of the exercise: the [`traits::Simulation`]
//! interface the app shell drives, bounding-volume tracking, pairwise
//! collision detection with the structural allow-list, the hitch latch
//! state machine, and the robot-and-trailer simulation that ties them all
//! together.

pub mod bounds;
pub mod collision;
pub mod coupling;
pub mod robot_trailer;
pub mod traits;

// Re-export main types
pub use bounds::{Aabb, BoundsSnapshot, BoundsTracker};
pub use collision::{AllowedPairSet, Collision, CollisionDetector, PartPair};
pub use coupling::{Coupling, LatchState};
pub use robot_trailer::RobotTrailerSim;
pub use traits::Simulation;
