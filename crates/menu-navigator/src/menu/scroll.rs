use crate::input::Directions;

/// Auto-repeat timing in frames.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollTiming {
    /// Frames between the initial press step and the first repeat.
    pub start_delay: u8,
    /// Frames between subsequent repeats.
    pub continue_delay: u8,
}

impl Default for ScrollTiming {
    fn default() -> Self {
        Self {
            start_delay: 30,
            continue_delay: 6,
        }
    }
}

impl ScrollTiming {
    pub const fn with_start_delay(mut self, start_delay: u8) -> Self {
        self.start_delay = start_delay;
        self
    }

    pub const fn with_continue_delay(mut self, continue_delay: u8) -> Self {
        self.continue_delay = continue_delay;
        self
    }
}

/// Press/repeat state for held directions.
///
/// `scrolling` is false both while idle and while waiting out the start delay
/// after a fresh press; it turns true once the first repeat fires.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ScrollState {
    scrolling: bool,
    delay: u8,
    prev_held: Directions,
}

impl ScrollState {
    pub(crate) const fn new(timing: ScrollTiming) -> Self {
        Self {
            scrolling: false,
            delay: timing.start_delay,
            prev_held: Directions::empty(),
        }
    }

    pub(crate) const fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Feeds one frame of held directions and returns whether the pointer
    /// should take a step with them.
    ///
    /// A delay of zero behaves like a delay of one: a step every frame.
    pub(crate) fn advance(&mut self, held: Directions, timing: ScrollTiming) -> bool {
        let step = if self.scrolling {
            if held.is_empty() {
                self.scrolling = false;
                false
            } else if held != self.prev_held || self.count_down() {
                self.delay = timing.continue_delay;
                true
            } else {
                false
            }
        } else if held.is_empty() {
            false
        } else if self.prev_held.is_empty() {
            self.delay = timing.start_delay;
            true
        } else if held != self.prev_held || self.count_down() {
            self.scrolling = true;
            self.delay = timing.continue_delay;
            true
        } else {
            false
        };

        self.prev_held = held;
        step
    }

    fn count_down(&mut self) -> bool {
        self.delay = self.delay.saturating_sub(1);
        self.delay == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_frames(state: &mut ScrollState, held: Directions, frames: usize) -> Vec<usize> {
        let timing = ScrollTiming::default();
        (1..=frames)
            .filter(|_| state.advance(held, timing))
            .collect()
    }

    #[test]
    fn hold_steps_on_press_then_after_start_then_every_continue() {
        let mut state = ScrollState::new(ScrollTiming::default());
        let steps = step_frames(&mut state, Directions::DOWN, 62);
        assert_eq!(steps, vec![1, 31, 37, 43, 49, 55, 61]);
        assert!(state.is_scrolling());
    }

    #[test]
    fn release_stops_immediately() {
        let timing = ScrollTiming::default();
        let mut state = ScrollState::new(timing);
        for _ in 0..40 {
            state.advance(Directions::DOWN, timing);
        }
        assert!(state.is_scrolling());

        assert!(!state.advance(Directions::empty(), timing));
        assert!(!state.is_scrolling());

        // next hold is a fresh press again
        assert!(state.advance(Directions::DOWN, timing));
        assert!(!state.advance(Directions::DOWN, timing));
    }

    #[test]
    fn changing_held_set_steps_immediately() {
        let timing = ScrollTiming::default();
        let mut state = ScrollState::new(timing);

        assert!(state.advance(Directions::DOWN, timing));
        assert!(!state.advance(Directions::DOWN, timing));
        // arming interrupted: step now and start repeating
        assert!(state.advance(Directions::DOWN | Directions::RIGHT, timing));
        assert!(state.is_scrolling());
        // partial release while scrolling
        assert!(state.advance(Directions::RIGHT, timing));
        for _ in 0..5 {
            assert!(!state.advance(Directions::RIGHT, timing));
        }
        assert!(state.advance(Directions::RIGHT, timing));
    }

    #[test]
    fn zero_delays_repeat_every_frame() {
        let timing = ScrollTiming::default()
            .with_start_delay(0)
            .with_continue_delay(0);
        let mut state = ScrollState::new(timing);
        for _ in 0..5 {
            assert!(state.advance(Directions::UP, timing));
        }
    }
}
