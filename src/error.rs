use core::convert::Infallible;

use embedded_time::clock;

#[derive(Debug)]
pub enum Error<E = Infallible> {
    /// Reading or configuring the input pin failed.
    Pin(E),
    /// The clock could not provide a timestamp.
    Clock(clock::Error),
}

impl<E> From<clock::Error> for Error<E> {
    fn from(e: clock::Error) -> Self {
        Error::Clock(e)
    }
}

impl Error<Infallible> {
    /// Widen a pin-free error to any pin error type.
    pub fn widen<E>(self) -> Error<E> {
        match self {
            Error::Pin(never) => match never {},
            Error::Clock(e) => Error::Clock(e),
        }
    }
}
