use embedded_time::duration::Milliseconds;

use crate::ButtonState;

pub const DEFAULT_DEBOUNCE_INTERVAL: Milliseconds<u32> = Milliseconds(10);

/// Construction parameters shared by [`DebounceButton`](crate::DebounceButton)
/// and [`DebouncedPin`](crate::DebouncedPin).
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct DebounceConfig {
    /// How long a raw level must hold, strictly, before it becomes stable.
    pub interval: Milliseconds<u32>,
    /// Stable state reported before the first commit.
    pub initial_state: ButtonState,
    /// Flip the raw level before it is interpreted.
    pub invert: bool,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DebounceConfig {
    pub const fn new() -> Self {
        Self {
            interval: DEFAULT_DEBOUNCE_INTERVAL,
            initial_state: ButtonState::Pressed,
            invert: false,
        }
    }

    pub const fn with_interval(mut self, interval: Milliseconds<u32>) -> Self {
        self.interval = interval;
        self
    }

    pub const fn with_initial_state(mut self, initial_state: ButtonState) -> Self {
        self.initial_state = initial_state;
        self
    }

    pub const fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }
}
