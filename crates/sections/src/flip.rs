//! Certificate flip-card state. Cards flip exclusively: selecting one
//! unflips whichever was flipped before.

/// How a card was activated. Keyboard activation behaves exactly like a
/// click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Click,
    Enter,
    Space,
}

/// At most one flipped card id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipState {
    selected: Option<u32>,
}

impl FlipState {
    /// Flip the card, or unflip it if it was already showing its back.
    pub fn toggle(&mut self, id: u32) {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn activate(&mut self, id: u32, _key: ActivationKey) {
        self.toggle(id);
    }

    pub fn is_flipped(&self, id: u32) -> bool {
        self.selected == Some(id)
    }

    pub fn flipped(&self) -> Option<u32> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_unflips() {
        let mut flip = FlipState::default();
        flip.toggle(1);
        assert!(flip.is_flipped(1));
        flip.toggle(1);
        assert!(!flip.is_flipped(1));
        assert_eq!(flip.flipped(), None);
    }

    #[test]
    fn flipping_a_second_card_unflips_the_first() {
        let mut flip = FlipState::default();
        flip.toggle(1);
        flip.toggle(2);
        assert!(!flip.is_flipped(1));
        assert!(flip.is_flipped(2));
    }

    #[test]
    fn keyboard_activation_matches_click() {
        let mut via_click = FlipState::default();
        let mut via_enter = FlipState::default();
        let mut via_space = FlipState::default();
        via_click.activate(3, ActivationKey::Click);
        via_enter.activate(3, ActivationKey::Enter);
        via_space.activate(3, ActivationKey::Space);
        assert_eq!(via_click, via_enter);
        assert_eq!(via_click, via_space);
    }
}
