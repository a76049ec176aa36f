/// Held-key state for the three logical inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    /// Applies a `KeyboardEvent.code` press or release. Returns false for keys
    /// that don't map to any input.
    pub fn apply_key(&mut self, code: &str, pressed: bool) -> bool {
        match code {
            "ArrowLeft" => self.left = pressed,
            "ArrowRight" => self.right = pressed,
            "Space" => self.jump = pressed,
            _ => return false,
        }
        true
    }

    /// -1, 0 or 1. Left wins when both directions are held.
    pub fn horizontal(&self) -> f64 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::default();
        assert!(input.apply_key("ArrowRight", true));
        assert!(input.right);
        assert_eq!(input.horizontal(), 1.0);

        assert!(input.apply_key("ArrowRight", false));
        assert!(!input.right);
        assert_eq!(input.horizontal(), 0.0);
    }

    #[test]
    fn test_unmapped_keys() {
        let mut input = InputState::default();
        assert!(!input.apply_key("KeyQ", true));
        assert!(!input.apply_key("ArrowUp", true));
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_left_wins() {
        let mut input = InputState::default();
        input.apply_key("ArrowRight", true);
        input.apply_key("ArrowLeft", true);
        assert_eq!(input.horizontal(), -1.0);
    }

    #[test]
    fn test_clear() {
        let mut input = InputState {
            left: true,
            right: true,
            jump: true,
        };
        input.clear();
        assert_eq!(input, InputState::default());
    }
}
