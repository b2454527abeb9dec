//! Vehicle kinematics.
//!
//! Per-frame integration from the held-key snapshot: throttle and brake
//! adjust scalar speed, steering adjusts heading (only while moving),
//! and position advances along the heading.

use folio_common::MotionPreference;
use folio_input::DriveControls;
use glam::Vec3;

use crate::hud::Hud;

/// Tuning constants for the kinematic model. Speeds are in world units
/// per frame; HUD display multiplies by [`Hud::DISPLAY_SCALE`].
#[derive(Debug, Clone, Copy)]
pub struct DriveTuning {
    pub max_speed: f32,
    pub accel: f32,
    pub friction: f32,
    pub brake_factor: f32,
    pub turn_rate: f32,
    /// Below this |speed| the wheels have no authority and steering is
    /// ignored.
    pub steer_threshold: f32,
}

impl Default for DriveTuning {
    fn default() -> Self {
        Self {
            max_speed: 0.8,
            accel: 0.01,
            friction: 0.97,
            brake_factor: 0.9,
            turn_rate: 0.04,
            steer_threshold: 0.01,
        }
    }
}

/// Pose and scalar speed of the car. Heading is radians about +Y,
/// with zero facing +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    pub position: Vec3,
    pub heading: f32,
    pub speed: f32,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            heading: 0.0,
            speed: 0.0,
        }
    }
}

impl VehicleState {
    /// Unit vector the car is facing, in the ground plane.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.heading.sin(), 0.0, self.heading.cos())
    }
}

/// Owns the vehicle state and steps it from control snapshots.
pub struct DriveSim {
    state: VehicleState,
    tuning: DriveTuning,
    motion: MotionPreference,
}

impl DriveSim {
    pub fn new(tuning: DriveTuning, motion: MotionPreference) -> Self {
        Self {
            state: VehicleState::default(),
            tuning,
            motion,
        }
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn tuning(&self) -> &DriveTuning {
        &self.tuning
    }

    /// Advances one frame from the given control snapshot and returns
    /// the HUD read-model for this frame.
    ///
    /// Under reduced motion the state is left untouched; the HUD still
    /// reflects it so the overlay renders.
    pub fn step(&mut self, controls: DriveControls) -> Hud {
        if self.motion.is_reduced() {
            return Hud::from_speed(self.state.speed);
        }

        let t = self.tuning;
        let s = &mut self.state;

        if controls.forward {
            s.speed = (s.speed + t.accel).min(t.max_speed);
        } else if controls.reverse {
            s.speed = (s.speed - t.accel).max(-t.max_speed * 0.5);
        } else {
            s.speed *= t.friction;
        }

        // Brake stacks on top of throttle/coast for the same frame.
        if controls.brake {
            s.speed *= t.brake_factor;
        }

        if s.speed.abs() > t.steer_threshold {
            // Steering flips with travel direction so reversing feels
            // like a real car.
            let dir = s.speed.signum();
            if controls.left {
                s.heading += t.turn_rate * dir;
            }
            if controls.right {
                s.heading -= t.turn_rate * dir;
            }
        }

        s.position += s.forward() * s.speed;

        // Level-triggered: holding reset pins the car at the origin.
        if controls.reset {
            *s = VehicleState::default();
        }

        Hud::from_speed(s.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::Gear;
    use folio_input::{DriveKey, KeyState};

    fn full_motion() -> DriveSim {
        DriveSim::new(DriveTuning::default(), MotionPreference::Full)
    }

    fn held(keys: &[DriveKey]) -> DriveControls {
        let mut state = KeyState::default();
        for &k in keys {
            state.press(k);
        }
        state.controls()
    }

    #[test]
    fn throttle_ramps_monotonically_to_clamp() {
        let mut sim = full_motion();
        let controls = held(&[DriveKey::Forward]);
        let mut prev = 0.0;
        for _ in 0..200 {
            sim.step(controls);
            let v = sim.state().speed;
            assert!(v >= prev);
            assert!(v <= sim.tuning().max_speed + 1e-6);
            prev = v;
        }
        assert!((sim.state().speed - sim.tuning().max_speed).abs() < 1e-6);
    }

    #[test]
    fn reverse_clamps_at_half_max() {
        let mut sim = full_motion();
        let controls = held(&[DriveKey::Reverse]);
        for _ in 0..200 {
            sim.step(controls);
        }
        let cap = -sim.tuning().max_speed * 0.5;
        assert!((sim.state().speed - cap).abs() < 1e-6);
    }

    #[test]
    fn coasting_decays_toward_zero() {
        let mut sim = full_motion();
        for _ in 0..100 {
            sim.step(held(&[DriveKey::Forward]));
        }
        let initial = sim.state().speed;
        let idle = DriveControls::default();
        for _ in 0..500 {
            sim.step(idle);
        }
        assert!(sim.state().speed.abs() < initial * 1e-6);
    }

    #[test]
    fn brake_stacks_with_friction() {
        let mut sim = full_motion();
        for _ in 0..100 {
            sim.step(held(&[DriveKey::Forward]));
        }
        let v0 = sim.state().speed;
        sim.step(held(&[DriveKey::Brake]));
        let t = sim.tuning();
        let expected = v0 * t.friction * t.brake_factor;
        assert!((sim.state().speed - expected).abs() < 1e-6);
    }

    #[test]
    fn steering_ignored_below_threshold() {
        let mut sim = full_motion();
        sim.step(held(&[DriveKey::Left]));
        assert_eq!(sim.state().heading, 0.0);
    }

    #[test]
    fn steering_sign_flips_in_reverse() {
        let mut forward = full_motion();
        for _ in 0..50 {
            forward.step(held(&[DriveKey::Forward]));
        }
        forward.step(held(&[DriveKey::Left]));
        assert!(forward.state().heading > 0.0);

        let mut reverse = full_motion();
        for _ in 0..50 {
            reverse.step(held(&[DriveKey::Reverse]));
        }
        reverse.step(held(&[DriveKey::Left]));
        assert!(reverse.state().heading < 0.0);
    }

    #[test]
    fn reset_takes_effect_same_tick() {
        let mut sim = full_motion();
        for _ in 0..50 {
            sim.step(held(&[DriveKey::Forward, DriveKey::Left]));
        }
        assert!(sim.state().position.length() > 0.0);
        sim.step(held(&[DriveKey::Forward, DriveKey::Reset]));
        assert_eq!(*sim.state(), VehicleState::default());
    }

    #[test]
    fn reduced_motion_skips_integration_but_reports_hud() {
        let mut sim = DriveSim::new(DriveTuning::default(), MotionPreference::Reduced);
        let hud = sim.step(held(&[DriveKey::Forward]));
        assert_eq!(sim.state().speed, 0.0);
        assert_eq!(hud.gear, Gear::Neutral);
    }

    #[test]
    fn position_advances_along_heading() {
        let mut sim = full_motion();
        for _ in 0..10 {
            sim.step(held(&[DriveKey::Forward]));
        }
        let s = sim.state();
        // Heading untouched, so all travel is along +Z.
        assert_eq!(s.position.x, 0.0);
        assert!(s.position.z > 0.0);
    }
}
