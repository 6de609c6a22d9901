#![no_std]

pub mod mutex;
pub mod selector;
pub mod shared;
pub mod switch;
pub mod topology;

#[cfg(test)]
mod fake;

pub use selector::{ChannelSelector, Exclusive, Exclusivity, Shared};
pub use shared::{MuxChannel, SharedSelector};
pub use switch::{PinSwitchBank, Polarity, SwitchError};
pub use topology::{Differential, Single, Topology};

use embedded_hal::digital::Error as HalError;

/// One physical side of an analog multiplexer: a row of switches that
/// can each tie a channel to the common terminal.
pub trait SwitchBank {
    type Error: HalError;

    /// Close the switch for `channel`.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::Error>;

    /// Open the switch for `channel`.
    fn unset_channel(&mut self, channel: u8) -> Result<(), Self::Error>;
}

impl<S> SwitchBank for &mut S
where
    S: SwitchBank + ?Sized,
{
    type Error = S::Error;

    fn set_channel(&mut self, channel: u8) -> Result<(), Self::Error> {
        (**self).set_channel(channel)
    }

    fn unset_channel(&mut self, channel: u8) -> Result<(), Self::Error> {
        (**self).unset_channel(channel)
    }
}

/// Operations every analog multiplexer configuration supports.
pub trait AnalogMultiplexer {
    type Error: HalError;

    /// Open every switch and forget the last selection.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Disconnect only the last selected channel, then connect `channel`.
    ///
    /// Channels connected by other means stay connected.
    fn fast_select(&mut self, channel: u8) -> Result<(), Self::Error>;

    /// The channel most recently connected through a select call.
    fn last_channel(&self) -> Option<u8>;
}

/// Full-scan selection, available when several channels may be connected.
pub trait Select: AnalogMultiplexer {
    /// Disconnect every channel, then connect `channel`.
    fn select(&mut self, channel: u8) -> Result<(), Self::Error>;
}

/// Independent connection of a single differential channel.
pub trait Connect: AnalogMultiplexer {
    fn connect(&mut self, channel: u8) -> Result<(), Self::Error>;
}

/// Independent disconnection of a single differential channel.
pub trait Disconnect: AnalogMultiplexer {
    fn disconnect(&mut self, channel: u8) -> Result<(), Self::Error>;
}

/// Cheap disconnect for muxes that never have more than one channel closed.
pub trait DisconnectAll: AnalogMultiplexer {
    fn disconnect_all(&mut self) -> Result<(), Self::Error>;
}
