//! How a channel maps onto switch banks: one side, or an A/B pair.

use crate::SwitchBank;
use embedded_hal::digital::Error as HalError;

/// Connects and disconnects a channel on every side of the mux.
pub trait Topology {
    type Error: HalError;

    fn connect(&mut self, channel: u8) -> Result<(), Self::Error>;

    fn disconnect(&mut self, channel: u8) -> Result<(), Self::Error>;
}

/// Single-ended mux: one switch per channel.
pub struct Single<S>
where
    S: SwitchBank,
{
    bank: S,
}

impl<S> Single<S>
where
    S: SwitchBank,
{
    pub fn new(bank: S) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &S {
        &self.bank
    }

    #[cfg(test)]
    pub(crate) fn bank_mut(&mut self) -> &mut S {
        &mut self.bank
    }

    pub fn release(self) -> S {
        self.bank
    }
}

impl<S> Topology for Single<S>
where
    S: SwitchBank,
{
    type Error = S::Error;

    fn connect(&mut self, channel: u8) -> Result<(), Self::Error> {
        self.bank.set_channel(channel)
    }

    fn disconnect(&mut self, channel: u8) -> Result<(), Self::Error> {
        self.bank.unset_channel(channel)
    }
}

/// Differential mux: sides A and B switch together, A first.
pub struct Differential<A, B>
where
    A: SwitchBank,
    B: SwitchBank<Error = A::Error>,
{
    side_a: A,
    side_b: B,
}

impl<A, B> Differential<A, B>
where
    A: SwitchBank,
    B: SwitchBank<Error = A::Error>,
{
    pub fn new(side_a: A, side_b: B) -> Self {
        Self { side_a, side_b }
    }

    pub fn sides(&self) -> (&A, &B) {
        (&self.side_a, &self.side_b)
    }

    pub fn release(self) -> (A, B) {
        (self.side_a, self.side_b)
    }
}

impl<A, B> Topology for Differential<A, B>
where
    A: SwitchBank,
    B: SwitchBank<Error = A::Error>,
{
    type Error = A::Error;

    fn connect(&mut self, channel: u8) -> Result<(), Self::Error> {
        self.side_a.set_channel(channel)?;
        self.side_b.set_channel(channel)
    }

    fn disconnect(&mut self, channel: u8) -> Result<(), Self::Error> {
        self.side_a.unset_channel(channel)?;
        self.side_b.unset_channel(channel)
    }
}
