//! In-memory switch bank that records what the selector did to it.

use crate::SwitchBank;
use embedded_hal::digital::{Error as HalError, ErrorKind};

#[derive(Debug, PartialEq, Eq)]
pub struct FakeError;

impl HalError for FakeError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct FakeBank<const N: usize> {
    closed: [bool; N],
    pub sets: usize,
    pub unsets: usize,
    /// Channel whose switch refuses to move.
    pub fail_on: Option<u8>,
}

impl<const N: usize> FakeBank<N> {
    pub fn new() -> Self {
        Self {
            closed: [false; N],
            sets: 0,
            unsets: 0,
            fail_on: None,
        }
    }

    pub fn is_closed(&self, channel: u8) -> bool {
        self.closed[channel as usize]
    }

    pub fn closed_count(&self) -> usize {
        self.closed.iter().filter(|c| **c).count()
    }

    /// Close a switch behind the selector's back.
    pub fn force_closed(&mut self, channel: u8) {
        self.closed[channel as usize] = true;
    }

    fn check(&self, channel: u8) -> Result<(), FakeError> {
        if self.fail_on == Some(channel) {
            return Err(FakeError);
        }
        Ok(())
    }
}

impl<const N: usize> SwitchBank for FakeBank<N> {
    type Error = FakeError;

    fn set_channel(&mut self, channel: u8) -> Result<(), Self::Error> {
        self.check(channel)?;
        self.closed[channel as usize] = true;
        self.sets += 1;
        Ok(())
    }

    fn unset_channel(&mut self, channel: u8) -> Result<(), Self::Error> {
        self.check(channel)?;
        self.closed[channel as usize] = false;
        self.unsets += 1;
        Ok(())
    }
}
