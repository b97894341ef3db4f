//! # Rig Module
//!
//! Pose state and the one-time construction of the articulated robot and its
//! trailer. [`RigBuilder`] assembles the hierarchy into a scene, registers
//! every rigid part that collision checking cares about, and returns named
//! pivot handles that the update loop drives each tick.

pub mod builder;
pub mod pose;

pub use builder::{BuiltRig, RigBuilder, RigHandles, SIDES};
pub use pose::{Joint, Pose};

use thiserror::Error;

/// Rig construction and part-tracking failures.
///
/// These are programmer errors (bad part wiring), not runtime conditions; the
/// simulation has no fatal paths once the rig is built.
#[derive(Debug, Error)]
pub enum RigError {
    #[error("part `{0}` is already tracked")]
    DuplicatePart(String),
    #[error("node `{0}` has no shape to derive bounds from")]
    MissingShape(String),
}
