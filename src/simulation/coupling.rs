//! The hitch latch: a two-state machine with a contact debounce.
//!
//! The first foot/linkage contact is treated as incidental (legs swing past
//! the tow bar during normal driving) and only arms the counter; the second
//! distinct contact latches. Latching is a one-way transition for the life
//! of the process, after which the trailer moves rigidly with the robot.

use cgmath::Vector3;

use super::bounds::Aabb;

/// Distinct hitch contacts required before the latch engages
pub const CONTACTS_TO_LATCH: u32 = 2;

/// Coupling state: unlatched (counting contacts) or latched (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchState {
    Unlatched,
    Latched,
}

/// Tracks hitch contacts and decides when the trailer welds to the rig
#[derive(Debug)]
pub struct Coupling {
    state: LatchState,
    contacts: u32,
    touching: bool,
}

impl Coupling {
    pub fn new() -> Self {
        Self {
            state: LatchState::Unlatched,
            contacts: 0,
            touching: false,
        }
    }

    pub fn state(&self) -> LatchState {
        self.state
    }

    pub fn is_latched(&self) -> bool {
        self.state == LatchState::Latched
    }

    /// Contacts observed so far (saturates once latched)
    pub fn contacts(&self) -> u32 {
        self.contacts
    }

    /// Feeds this tick's foot and linkage bounds into the state machine.
    ///
    /// A contact is the transition from separated to intersecting; a pair
    /// that stays overlapped across ticks counts once. Returns the snap
    /// offset (foot center minus linkage center) exactly once, on the tick
    /// the latch engages; the caller adds it to the trailer root position to
    /// pull the linkage flush against the foot.
    pub fn observe(&mut self, foot: &Aabb, linkage: &Aabb) -> Option<Vector3<f32>> {
        if self.is_latched() {
            return None;
        }

        let touching = foot.intersects(linkage);
        let fresh_contact = touching && !self.touching;
        self.touching = touching;
        if !fresh_contact {
            return None;
        }

        self.contacts += 1;
        log::debug!("hitch contact {} of {}", self.contacts, CONTACTS_TO_LATCH);
        if self.contacts < CONTACTS_TO_LATCH {
            return None;
        }

        self.state = LatchState::Latched;
        log::info!("trailer latched to rig");
        Some(foot.center() - linkage.center())
    }
}

impl Default for Coupling {
    fn default() -> Self {
        Self::new()
    }
}
