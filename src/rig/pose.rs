use std::f32::consts::{FRAC_PI_2, PI};

/// A 1-D bounded joint value with saturating step transitions.
///
/// `increase` and `decrease` move the value by the per-tick step and clamp to
/// `[min, max]`; out-of-range requests saturate, they never wrap and never
/// fail. The invariant that the value stays inside its range after any update
/// is what the rest of the rig relies on.
#[derive(Debug, Clone, Copy)]
pub struct Joint {
    value: f32,
    min: f32,
    max: f32,
    step: f32,
}

impl Joint {
    pub fn new(value: f32, min: f32, max: f32, step: f32) -> Self {
        Self {
            value: value.clamp(min, max),
            min,
            max,
            step,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Advances one step toward the upper bound
    pub fn increase(&mut self) {
        self.value = (self.value + self.step).clamp(self.min, self.max);
    }

    /// Advances one step toward the lower bound
    pub fn decrease(&mut self) {
        self.value = (self.value - self.step).clamp(self.min, self.max);
    }
}

/// The full pose of the exercise: four articulation joints plus the towed
/// unit's ground-plane offset.
///
/// Angle joints are radians; the arm joint is a translation (how far the arm
/// assemblies have slid in toward the torso). The trailer offsets share the
/// joint mechanics so directional movement clamps at the edge of the play
/// area instead of drifting forever.
#[derive(Debug, Clone, Copy)]
pub struct Pose {
    /// theta1: feet fold from extended (0) to fully tucked (pi)
    pub feet: Joint,
    /// theta2: legs swing forward up to a quarter turn
    pub legs: Joint,
    /// delta1: arms slide inward along X, 0 (out) to 5 (flush)
    pub arms: Joint,
    /// theta3: head folds backward from upright (0) to -pi
    pub head: Joint,
    /// Towed unit offset along world X
    pub trailer_x: Joint,
    /// Towed unit offset along world Z
    pub trailer_z: Joint,
}

impl Pose {
    /// The rest pose: everything extended, trailer at its spawn offset
    pub fn resting() -> Self {
        Self {
            feet: Joint::new(0.0, 0.0, PI, 0.05),
            legs: Joint::new(0.0, 0.0, FRAC_PI_2, 0.04),
            arms: Joint::new(0.0, 0.0, 5.0, 0.1),
            head: Joint::new(0.0, -PI, 0.0, 0.05),
            trailer_x: Joint::new(0.0, -100.0, 100.0, 0.5),
            trailer_z: Joint::new(0.0, -100.0, 100.0, 0.5),
        }
    }
}
