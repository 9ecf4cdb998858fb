use embedded_hal::digital::v2::PinState;
use embedded_time::duration::Milliseconds;
use embedded_time::fixed_point::FixedPoint;
use embedded_time::{Clock, Instant};

use crate::{DebounceConfig, Error};

/// Debounced button state.
///
/// Buttons are expected to be wired against a pull-up, so a closed switch
/// reads low: `Pressed` is the low level, `Released` the high level.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ButtonState {
    Pressed,
    Released,
}

impl ButtonState {
    pub const fn from_level(high: bool) -> Self {
        if high {
            ButtonState::Released
        } else {
            ButtonState::Pressed
        }
    }

    pub const fn level(self) -> bool {
        matches!(self, ButtonState::Released)
    }
}

impl From<ButtonState> for PinState {
    fn from(state: ButtonState) -> Self {
        PinState::from(state.level())
    }
}

/// Debounce tracker fed with raw samples by the caller.
///
/// A new level is accepted once it has held for strictly longer than the
/// interval, measured from the last raw edge. Any edge restarts the window.
pub struct DebounceButton<'a, C: Clock<T = u64>> {
    clock: &'a C,
    interval: Milliseconds<u32>,
    invert: bool,
    stable: bool,
    last_raw: bool,
    last_change: Instant<C>,
}

impl<'a, C: Clock<T = u64>> DebounceButton<'a, C> {
    /// The settling window starts at the clock epoch and the raw level is
    /// assumed to match `config.initial_state` until the first sample.
    pub fn new(clock: &'a C, config: DebounceConfig) -> Self {
        let level = config.initial_state.level();
        Self {
            clock,
            interval: config.interval,
            invert: config.invert,
            stable: level,
            last_raw: level,
            last_change: Instant::new(0),
        }
    }

    /// Feeds one raw sample, returns `true` if the stable state changed.
    ///
    /// A clock failure leaves the tracker untouched.
    pub fn update(&mut self, raw: bool) -> Result<bool, Error> {
        let level = if self.invert { !raw } else { raw };
        let now = self.clock.try_now()?;

        if level != self.last_raw {
            log::trace!("raw edge {} -> {}", self.last_raw, level);
            self.last_change = now;
        }

        let mut changed = false;
        if self.elapsed_at(&now).integer() > u64::from(self.interval.integer())
            && level != self.stable
        {
            self.stable = level;
            changed = true;
            log::debug!("button {:?}", self.state());
        }

        // Tracks every sample, so a bounce inside the window re-arms it.
        self.last_raw = level;

        Ok(changed)
    }

    pub fn state(&self) -> ButtonState {
        ButtonState::from_level(self.stable)
    }

    pub fn is_pressed(&self) -> bool {
        self.state() == ButtonState::Pressed
    }

    pub fn is_released(&self) -> bool {
        self.state() == ButtonState::Released
    }

    /// Time since the last raw edge, not since the last stable change.
    pub fn duration(&self) -> Result<Milliseconds<u64>, Error> {
        let now = self.clock.try_now()?;
        Ok(self.elapsed_at(&now))
    }

    pub fn interval(&self) -> Milliseconds<u32> {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Milliseconds<u32>) {
        self.interval = interval;
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn set_invert(&mut self, invert: bool) {
        self.invert = invert;
    }

    pub(crate) fn level(&self) -> bool {
        self.stable
    }

    // A clock running backwards counts as no time elapsed.
    fn elapsed_at(&self, now: &Instant<C>) -> Milliseconds<u64> {
        match now.checked_duration_since(&self.last_change) {
            Some(elapsed) => {
                Milliseconds::<u64>::try_from(elapsed).unwrap_or(Milliseconds(u64::MAX))
            }
            None => Milliseconds(0),
        }
    }
}
