//! Drive simulation: a small kinematic vehicle driven by held-key state,
//! a smoothed chase camera, and the HUD speed/gear read-model.
//!
//! # Invariants
//! - The vehicle integrates once per rendered frame from the current
//!   key-state snapshot; there is no fixed timestep.
//! - Reset is level-triggered: while held, position/heading/speed are
//!   forced to zero every frame.
//! - Under reduced motion the physics step is skipped entirely but the
//!   frame still renders.

mod camera;
mod hud;
mod scene;
mod vehicle;

pub use camera::ChaseCamera;
pub use hud::{Gear, Hud, HudChannel};
pub use scene::DriveScene;
pub use vehicle::{DriveSim, DriveTuning, VehicleState};

pub fn crate_info() -> &'static str {
    "folio-drive v0.1.0"
}
