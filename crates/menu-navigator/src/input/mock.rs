use super::{Directions, KeyState, Keypad};

/// In-memory keypad used during bring-up and in tests.
///
/// Held directions stay until changed; activate/cancel presses are reported
/// by the next poll only.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockKeypad {
    held: Directions,
    activate_pending: bool,
    cancel_pending: bool,
}

impl MockKeypad {
    pub const fn new() -> Self {
        Self {
            held: Directions::empty(),
            activate_pending: false,
            cancel_pending: false,
        }
    }

    pub fn hold(&mut self, held: Directions) {
        self.held = held;
    }

    pub fn release(&mut self) {
        self.held = Directions::empty();
    }

    pub fn press_activate(&mut self) {
        self.activate_pending = true;
    }

    pub fn press_cancel(&mut self) {
        self.cancel_pending = true;
    }

    pub const fn held(&self) -> Directions {
        self.held
    }
}

impl Keypad for MockKeypad {
    type Error = core::convert::Infallible;

    fn poll_keys(&mut self) -> Result<KeyState, Self::Error> {
        let state = KeyState {
            held: self.held,
            activate_pressed: self.activate_pending,
            cancel_pressed: self.cancel_pending,
        };
        self.activate_pending = false;
        self.cancel_pending = false;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presses_are_edges_and_holds_are_levels() {
        let mut keypad = MockKeypad::new();
        keypad.hold(Directions::DOWN);
        keypad.press_activate();

        let first = keypad.poll_keys().unwrap();
        assert_eq!(first.held, Directions::DOWN);
        assert!(first.activate_pressed);
        assert!(!first.cancel_pressed);

        let second = keypad.poll_keys().unwrap();
        assert_eq!(second, KeyState::holding(Directions::DOWN));

        keypad.release();
        assert_eq!(keypad.poll_keys().unwrap(), KeyState::released());
    }
}
