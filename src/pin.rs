use embedded_hal::digital::v2::InputPin;
use embedded_time::duration::Milliseconds;
use embedded_time::Clock;

use crate::{ButtonState, DebounceButton, DebounceConfig, Error};

/// One-off configuration of a pin as an input with the pull-up enabled.
///
/// HAL crates usually express this as a typestate conversion, implement this
/// for the unconfigured pin type to let [`DebouncedPin::with_pull_up`] do it.
pub trait IntoPullUpInput {
    type Input: InputPin;
    type Error;

    fn into_pull_up_input(self) -> Result<Self::Input, Self::Error>;
}

/// Debounce tracker that owns its input pin.
pub struct DebouncedPin<'a, P, C: Clock<T = u64>> {
    pin: P,
    button: DebounceButton<'a, C>,
}

impl<'a, P, E, C> DebouncedPin<'a, P, C>
where
    P: InputPin<Error = E>,
    C: Clock<T = u64>,
{
    /// Wraps a pin that is already configured as an input.
    pub fn new(pin: P, clock: &'a C, config: DebounceConfig) -> Self {
        Self {
            pin,
            button: DebounceButton::new(clock, config),
        }
    }

    pub fn with_pull_up<Q>(
        pin: Q,
        clock: &'a C,
        config: DebounceConfig,
    ) -> Result<Self, Error<Q::Error>>
    where
        Q: IntoPullUpInput<Input = P>,
    {
        let pin = pin.into_pull_up_input().map_err(Error::Pin)?;
        Ok(Self::new(pin, clock, config))
    }

    /// Samples the pin once, returns `true` if the stable state changed.
    pub fn update(&mut self) -> Result<bool, Error<E>> {
        let raw = self.pin.is_high().map_err(Error::Pin)?;
        self.button.update(raw).map_err(|e| e.widen())
    }

    pub fn state(&self) -> ButtonState {
        self.button.state()
    }

    pub fn is_pressed(&self) -> bool {
        self.button.is_pressed()
    }

    pub fn is_released(&self) -> bool {
        self.button.is_released()
    }

    pub fn duration(&self) -> Result<Milliseconds<u64>, Error> {
        self.button.duration()
    }

    pub fn interval(&self) -> Milliseconds<u32> {
        self.button.interval()
    }

    pub fn set_interval(&mut self, interval: Milliseconds<u32>) {
        self.button.set_interval(interval);
    }

    pub fn invert(&self) -> bool {
        self.button.invert()
    }

    pub fn set_invert(&mut self, invert: bool) {
        self.button.set_invert(invert);
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    pub fn release(self) -> (P, DebounceButton<'a, C>) {
        (self.pin, self.button)
    }
}

/// Reports the debounced level, after inversion.
impl<P, C> InputPin for DebouncedPin<'_, P, C>
where
    P: InputPin,
    C: Clock<T = u64>,
{
    type Error = P::Error;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.button.level())
    }
    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.button.level())
    }
}
