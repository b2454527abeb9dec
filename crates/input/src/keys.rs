/// The six drive inputs the car simulation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveKey {
    Forward,
    Reverse,
    Left,
    Right,
    Brake,
    Reset,
}

impl DriveKey {
    /// Map a key identifier to a drive input. Case-insensitive; space is
    /// the brake.
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id {
            " " => Some(Self::Brake),
            _ => match id.to_ascii_lowercase().as_str() {
                "w" => Some(Self::Forward),
                "s" => Some(Self::Reverse),
                "a" => Some(Self::Left),
                "d" => Some(Self::Right),
                "r" => Some(Self::Reset),
                _ => None,
            },
        }
    }
}

/// Boolean snapshot of the held drive keys, read once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveControls {
    pub forward: bool,
    pub reverse: bool,
    pub left: bool,
    pub right: bool,
    pub brake: bool,
    pub reset: bool,
}

/// Held/released key state for one mounted drive section.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: [bool; 6],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: DriveKey) {
        self.held[key as usize] = true;
    }

    pub fn release(&mut self, key: DriveKey) {
        self.held[key as usize] = false;
    }

    /// Route a raw key identifier. Returns true if it mapped to a drive
    /// input.
    pub fn handle_identifier(&mut self, id: &str, pressed: bool) -> bool {
        match DriveKey::from_identifier(id) {
            Some(key) => {
                tracing::trace!(?key, pressed, "drive key routed");
                if pressed {
                    self.press(key);
                } else {
                    self.release(key);
                }
                true
            }
            None => false,
        }
    }

    pub fn is_held(&self, key: DriveKey) -> bool {
        self.held[key as usize]
    }

    /// Drop all held keys; called when the drive section unmounts.
    pub fn clear(&mut self) {
        self.held = [false; 6];
    }

    pub fn controls(&self) -> DriveControls {
        DriveControls {
            forward: self.is_held(DriveKey::Forward),
            reverse: self.is_held(DriveKey::Reverse),
            left: self.is_held(DriveKey::Left),
            right: self.is_held(DriveKey::Right),
            brake: self.is_held(DriveKey::Brake),
            reset: self.is_held(DriveKey::Reset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_case_insensitive() {
        assert_eq!(DriveKey::from_identifier("w"), Some(DriveKey::Forward));
        assert_eq!(DriveKey::from_identifier("W"), Some(DriveKey::Forward));
        assert_eq!(DriveKey::from_identifier("A"), Some(DriveKey::Left));
        assert_eq!(DriveKey::from_identifier(" "), Some(DriveKey::Brake));
        assert_eq!(DriveKey::from_identifier("R"), Some(DriveKey::Reset));
        assert_eq!(DriveKey::from_identifier("q"), None);
    }

    #[test]
    fn press_release_round_trip() {
        let mut keys = KeyState::new();
        keys.press(DriveKey::Forward);
        assert!(keys.is_held(DriveKey::Forward));
        keys.release(DriveKey::Forward);
        assert!(!keys.is_held(DriveKey::Forward));
    }

    #[test]
    fn handle_identifier_routes_and_reports() {
        let mut keys = KeyState::new();
        assert!(keys.handle_identifier("d", true));
        assert!(keys.is_held(DriveKey::Right));
        assert!(!keys.handle_identifier("x", true));
    }

    #[test]
    fn controls_snapshot_matches_held_state() {
        let mut keys = KeyState::new();
        keys.press(DriveKey::Forward);
        keys.press(DriveKey::Left);
        let c = keys.controls();
        assert!(c.forward && c.left);
        assert!(!c.reverse && !c.right && !c.brake && !c.reset);
    }

    #[test]
    fn clear_drops_everything() {
        let mut keys = KeyState::new();
        keys.press(DriveKey::Forward);
        keys.press(DriveKey::Brake);
        keys.clear();
        assert_eq!(keys.controls(), DriveControls::default());
    }
}
