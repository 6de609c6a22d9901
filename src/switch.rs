//! Switch bank built from one GPIO enable line per channel.

use crate::SwitchBank;
use embedded_hal::digital::{Error as HalError, ErrorKind, OutputPin, PinState};

/// Possible errors from a pin-backed switch bank.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchError {
    /// The bank has no pin for the requested channel.
    NoSuchChannel,
    /// Underlying pin error from the HAL pin.
    PinError,
}

impl HalError for SwitchError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Level that closes a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    fn state(self, closed: bool) -> PinState {
        match self {
            Polarity::ActiveHigh => PinState::from(closed),
            Polarity::ActiveLow => PinState::from(!closed),
        }
    }
}

/// Drives `N` switch enable pins, pin `i` controlling channel `i`.
pub struct PinSwitchBank<P, const N: usize>
where
    P: OutputPin,
{
    pins: [P; N],
    polarity: Polarity,
}

impl<P, const N: usize> PinSwitchBank<P, N>
where
    P: OutputPin,
{
    /// Take ownership of the pins. Their level is left alone; the selector's
    /// `start` opens every switch.
    pub fn new(pins: [P; N], polarity: Polarity) -> Self {
        Self { pins, polarity }
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Give the pins back.
    pub fn release(self) -> [P; N] {
        self.pins
    }

    fn drive(&mut self, channel: u8, closed: bool) -> Result<(), SwitchError> {
        let state = self.polarity.state(closed);
        let pin = self
            .pins
            .get_mut(channel as usize)
            .ok_or(SwitchError::NoSuchChannel)?;
        pin.set_state(state).map_err(|_| SwitchError::PinError)
    }
}

impl<P, const N: usize> SwitchBank for PinSwitchBank<P, N>
where
    P: OutputPin,
{
    type Error = SwitchError;

    fn set_channel(&mut self, channel: u8) -> Result<(), Self::Error> {
        self.drive(channel, true)
    }

    fn unset_channel(&mut self, channel: u8) -> Result<(), Self::Error> {
        self.drive(channel, false)
    }
}
