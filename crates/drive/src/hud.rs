//! HUD read-model for the drive scene.
//!
//! Speed and gear are derived from the raw per-frame speed once per
//! step and published through a single-slot channel that the overlay
//! drains, so the sim never touches UI state directly.

/// Gear shown on the overlay, selected from display-unit speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gear {
    Neutral,
    Reverse,
    First,
    Second,
    Third,
    Fourth,
}

impl Gear {
    pub fn label(&self) -> &'static str {
        match self {
            Gear::Neutral => "N",
            Gear::Reverse => "R",
            Gear::First => "1",
            Gear::Second => "2",
            Gear::Third => "3",
            Gear::Fourth => "4",
        }
    }
}

/// Speedometer snapshot for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    /// Rounded display-unit speed, always non-negative.
    pub speed: u32,
    pub gear: Gear,
}

impl Hud {
    /// Raw world-units-per-frame speed to display units.
    pub const DISPLAY_SCALE: f32 = 200.0;

    /// Derives the overlay values from the raw signed speed. Reverse
    /// wins over the forward bands whenever the car is moving
    /// backward.
    pub fn from_speed(raw: f32) -> Self {
        let display = (raw.abs() * Self::DISPLAY_SCALE).round() as u32;
        let gear = if raw < 0.0 {
            Gear::Reverse
        } else if display == 0 {
            Gear::Neutral
        } else if display < 20 {
            Gear::First
        } else if display < 50 {
            Gear::Second
        } else if display < 90 {
            Gear::Third
        } else {
            Gear::Fourth
        };
        Self {
            speed: display,
            gear,
        }
    }
}

/// Single-slot mailbox between the sim step and the overlay. The sim
/// publishes every frame; the overlay takes whatever is newest.
#[derive(Debug, Default)]
pub struct HudChannel {
    latest: Option<Hud>,
}

impl HudChannel {
    pub fn publish(&mut self, hud: Hud) {
        self.latest = Some(hud);
    }

    /// Removes and returns the newest snapshot, if any arrived since
    /// the last take.
    pub fn take(&mut self) -> Option<Hud> {
        self.latest.take()
    }

    /// Peeks without consuming.
    pub fn latest(&self) -> Option<Hud> {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gear_bands_from_display_speed() {
        // Display units are raw * 200.
        assert_eq!(Hud::from_speed(0.0).gear, Gear::Neutral);
        assert_eq!(Hud::from_speed(10.0 / 200.0).gear, Gear::First);
        assert_eq!(Hud::from_speed(35.0 / 200.0).gear, Gear::Second);
        assert_eq!(Hud::from_speed(70.0 / 200.0).gear, Gear::Third);
        assert_eq!(Hud::from_speed(95.0 / 200.0).gear, Gear::Fourth);
    }

    #[test]
    fn reverse_wins_regardless_of_magnitude() {
        assert_eq!(Hud::from_speed(-5.0 / 200.0).gear, Gear::Reverse);
        assert_eq!(Hud::from_speed(-95.0 / 200.0).gear, Gear::Reverse);
    }

    #[test]
    fn display_speed_is_absolute() {
        assert_eq!(Hud::from_speed(-0.25).speed, 50);
        assert_eq!(Hud::from_speed(0.25).speed, 50);
    }

    #[test]
    fn band_edges() {
        assert_eq!(Hud::from_speed(19.0 / 200.0).gear, Gear::First);
        assert_eq!(Hud::from_speed(20.0 / 200.0).gear, Gear::Second);
        assert_eq!(Hud::from_speed(49.0 / 200.0).gear, Gear::Second);
        assert_eq!(Hud::from_speed(50.0 / 200.0).gear, Gear::Third);
        assert_eq!(Hud::from_speed(89.0 / 200.0).gear, Gear::Third);
        assert_eq!(Hud::from_speed(90.0 / 200.0).gear, Gear::Fourth);
    }

    #[test]
    fn channel_keeps_only_newest() {
        let mut channel = HudChannel::default();
        channel.publish(Hud::from_speed(0.1));
        channel.publish(Hud::from_speed(0.2));
        let hud = channel.take().unwrap();
        assert_eq!(hud.speed, 40);
        assert!(channel.take().is_none());
    }

    #[test]
    fn latest_does_not_consume() {
        let mut channel = HudChannel::default();
        channel.publish(Hud::from_speed(0.1));
        assert!(channel.latest().is_some());
        assert!(channel.take().is_some());
    }
}
