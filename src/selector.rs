//! The channel selector: tracks the last connected channel and drives the
//! switches of the configured topology.
//!
//! Which operations exist depends on the type parameters:
//!
//! * every selector can [`start`](AnalogMultiplexer::start) and
//!   [`fast_select`](AnalogMultiplexer::fast_select);
//! * [`Shared`] selectors may have several channels closed at once and get a
//!   full-scan [`select`](Select::select);
//! * [`Exclusive`] selectors never have more than one channel closed and get
//!   the cheap [`disconnect_all`](DisconnectAll::disconnect_all);
//! * [`Differential`] selectors can [`disconnect`](Disconnect::disconnect) a
//!   single channel, and [`connect`](Connect::connect) one when [`Shared`].

use crate::topology::{Differential, Topology};
use crate::{AnalogMultiplexer, Connect, Disconnect, DisconnectAll, Select, SwitchBank};
use core::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Marker for whether more than one channel may be connected at a time.
pub trait Exclusivity: sealed::Sealed {}

/// At most one channel is ever connected.
pub struct Exclusive;

/// Channels may be connected independently of each other.
pub struct Shared;

impl sealed::Sealed for Exclusive {}
impl sealed::Sealed for Shared {}
impl Exclusivity for Exclusive {}
impl Exclusivity for Shared {}

/// Analog mux channel selector with `CHANNELS` inputs.
///
/// Channel indices are not checked against `CHANNELS`; passing an index
/// the hardware does not have is a caller bug.
pub struct ChannelSelector<T, X, const CHANNELS: u8>
where
    T: Topology,
    X: Exclusivity,
{
    topology: T,
    last_channel: Option<u8>,
    _mode: PhantomData<X>,
}

impl<T, X, const CHANNELS: u8> ChannelSelector<T, X, CHANNELS>
where
    T: Topology,
    X: Exclusivity,
{
    /// Wrap the switch topology. No switch is touched until
    /// [`start`](AnalogMultiplexer::start) is called.
    pub fn new(topology: T) -> Self {
        Self {
            topology,
            last_channel: None,
            _mode: PhantomData,
        }
    }

    pub fn channel_count(&self) -> u8 {
        CHANNELS
    }

    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// Give back the switch topology, leaving the switches as they are.
    pub fn release(self) -> T {
        self.topology
    }

    #[cfg(test)]
    /// For testing only: reach the banks to inject switch failures.
    pub(crate) fn topology_mut(&mut self) -> &mut T {
        &mut self.topology
    }

    fn open_every_channel(&mut self) -> Result<(), T::Error> {
        self.last_channel = None;
        for channel in 0..CHANNELS {
            self.topology.disconnect(channel)?;
        }
        Ok(())
    }
}

impl<T, X, const CHANNELS: u8> AnalogMultiplexer for ChannelSelector<T, X, CHANNELS>
where
    T: Topology,
    X: Exclusivity,
{
    type Error = T::Error;

    fn start(&mut self) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("amux: start, opening {=u8} channels", CHANNELS);

        self.open_every_channel()
    }

    fn fast_select(&mut self, channel: u8) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "amux: fast_select {=u8} (last {})",
            channel,
            self.last_channel
        );

        if let Some(previous) = self.last_channel {
            self.topology.disconnect(previous)?;
            self.last_channel = None;
        }

        self.topology.connect(channel)?;
        self.last_channel = Some(channel);
        Ok(())
    }

    fn last_channel(&self) -> Option<u8> {
        self.last_channel
    }
}

impl<T, const CHANNELS: u8> Select for ChannelSelector<T, Shared, CHANNELS>
where
    T: Topology,
{
    fn select(&mut self, channel: u8) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("amux: select {=u8}", channel);

        self.open_every_channel()?;
        self.topology.connect(channel)?;
        self.last_channel = Some(channel);
        Ok(())
    }
}

impl<A, B, const CHANNELS: u8> Connect for ChannelSelector<Differential<A, B>, Shared, CHANNELS>
where
    A: SwitchBank,
    B: SwitchBank<Error = A::Error>,
{
    fn connect(&mut self, channel: u8) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("amux: connect {=u8}", channel);

        self.topology.connect(channel)
    }
}

impl<A, B, X, const CHANNELS: u8> Disconnect for ChannelSelector<Differential<A, B>, X, CHANNELS>
where
    A: SwitchBank,
    B: SwitchBank<Error = A::Error>,
    X: Exclusivity,
{
    fn disconnect(&mut self, channel: u8) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("amux: disconnect {=u8}", channel);

        self.topology.disconnect(channel)
    }
}

impl<T, const CHANNELS: u8> DisconnectAll for ChannelSelector<T, Exclusive, CHANNELS>
where
    T: Topology,
{
    fn disconnect_all(&mut self) -> Result<(), Self::Error> {
        // Only one channel can be closed, so opening the last one is enough.
        if let Some(previous) = self.last_channel {
            #[cfg(feature = "defmt")]
            defmt::trace!("amux: disconnect_all, opening {=u8}", previous);

            self.topology.disconnect(previous)?;
            self.last_channel = None;
        }
        Ok(())
    }
}
