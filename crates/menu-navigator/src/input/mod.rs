//! Input abstraction layer.

pub mod mock;

pub use mock::MockKeypad;

bitflags::bitflags! {
    /// Set of directional keys held down at once.
    ///
    /// Up/down and left/right each come from one axis, so at most two bits
    /// are set on real hardware, but any combination is accepted.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Directions: u8 {
        const UP = 1 << 0;
        const RIGHT = 1 << 2;
        const DOWN = 1 << 4;
        const LEFT = 1 << 6;
    }
}

/// Keypad state sampled once per frame.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KeyState {
    /// Directions currently held (level).
    pub held: Directions,
    /// Activate key went down this frame (edge).
    pub activate_pressed: bool,
    /// Cancel key went down this frame (edge).
    pub cancel_pressed: bool,
}

impl KeyState {
    pub const fn released() -> Self {
        Self {
            held: Directions::empty(),
            activate_pressed: false,
            cancel_pressed: false,
        }
    }

    pub const fn holding(held: Directions) -> Self {
        Self {
            held,
            activate_pressed: false,
            cancel_pressed: false,
        }
    }
}

/// Polled keypad.
pub trait Keypad {
    type Error;

    fn poll_keys(&mut self) -> Result<KeyState, Self::Error>;
}

impl<T> Keypad for &mut T
where
    T: Keypad + ?Sized,
{
    type Error = T::Error;

    fn poll_keys(&mut self) -> Result<KeyState, Self::Error> {
        (**self).poll_keys()
    }
}
