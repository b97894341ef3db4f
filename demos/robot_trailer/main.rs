//! # Robot & Trailer Demo
//!
//! Drive the articulated robot's joints with `q/a`, `w/s`, `e/d`, `r/f`,
//! steer the trailer with the arrow keys, and switch between the four
//! cameras with `1`-`4`. Ram the tow bar into the robot's right foot twice
//! and the trailer latches on for good.
//!
//! ## Usage
//! ```bash
//! RUST_LOG=info cargo run --example robot_trailer
//! ```

use trundle::prelude::*;

fn main() {
    env_logger::init();

    let mut app = trundle::default();
    app.attach_simulation(Box::new(RobotTrailerSim::new()));
    app.run();
}
