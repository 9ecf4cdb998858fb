//! Time based debouncing for a single push-button.
//!
//! A raw level has to stay unchanged for longer than the debounce interval
//! before it is accepted as the new stable state. Every raw edge restarts
//! the settling window, so a bouncing contact never gets through.
//!
//! [`DebounceButton`] is fed raw samples by the caller, [`DebouncedPin`] owns
//! an [`InputPin`](embedded_hal::digital::v2::InputPin) and reads it itself.
//! Both borrow an [`embedded_time::Clock`] for timestamps.
#![no_std]

mod button;
mod config;
mod error;
mod pin;

pub use button::{ButtonState, DebounceButton};
pub use config::{DebounceConfig, DEFAULT_DEBOUNCE_INTERVAL};
pub use error::Error;
pub use pin::{DebouncedPin, IntoPullUpInput};
