use crate::mutex::PortMutex;
use crate::{AnalogMultiplexer, Connect, Disconnect, Select};
use embedded_hal::digital::{ErrorType, OutputPin};

/// High-level wrapper: a channel selector behind a PortMutex, handed out as
/// per-channel handles.
pub struct SharedSelector<M>
where
    M: PortMutex,
    M::Port: AnalogMultiplexer,
{
    selector: M,
}

impl<M> SharedSelector<M>
where
    M: PortMutex,
    M::Port: AnalogMultiplexer,
{
    /// Wrap the selector in a PortMutex (e.g. RefCell).
    pub fn new(selector: M::Port) -> Self {
        Self {
            selector: M::create(selector),
        }
    }

    /// Run `f` with exclusive access to the selector.
    pub fn lock<R, F: FnOnce(&mut M::Port) -> R>(&self, f: F) -> R {
        self.selector.lock(f)
    }

    /// Handle for a single channel.
    pub fn channel(&self, channel: u8) -> MuxChannel<'_, M> {
        MuxChannel::new(&self.selector, channel)
    }

    /// Split into handles for channels `0..N`.
    ///
    /// `N` is not checked against the selector's channel count; it only has
    /// to fit the `u8` channel index space.
    pub fn split<const N: usize>(&mut self) -> [MuxChannel<'_, M>; N] {
        const {
            assert!(
                N <= u8::MAX as usize + 1,
                "split: more handles than u8 channel indices"
            )
        };
        let selector = &self.selector;
        core::array::from_fn(|i| MuxChannel::new(selector, i as u8))
    }

    pub fn into_inner(self) -> M::Port {
        self.selector.into_inner()
    }
}

/// A proxy for one channel of a shared selector.
pub struct MuxChannel<'a, M>
where
    M: PortMutex + 'a,
    M::Port: AnalogMultiplexer,
{
    selector: &'a M,
    channel: u8,
}

impl<'a, M> MuxChannel<'a, M>
where
    M: PortMutex,
    M::Port: AnalogMultiplexer,
{
    pub(crate) fn new(selector: &'a M, channel: u8) -> Self {
        Self { selector, channel }
    }

    pub fn index(&self) -> u8 {
        self.channel
    }

    /// Whether this channel was the last one selected.
    pub fn is_selected(&self) -> bool {
        self.selector.lock(|sel| sel.last_channel() == Some(self.channel))
    }

    pub fn fast_select(&mut self) -> Result<(), <M::Port as AnalogMultiplexer>::Error> {
        self.selector.lock(|sel| sel.fast_select(self.channel))
    }
}

impl<'a, M> MuxChannel<'a, M>
where
    M: PortMutex,
    M::Port: Select,
{
    pub fn select(&mut self) -> Result<(), <M::Port as AnalogMultiplexer>::Error> {
        self.selector.lock(|sel| sel.select(self.channel))
    }
}

impl<'a, M> MuxChannel<'a, M>
where
    M: PortMutex,
    M::Port: Connect,
{
    pub fn connect(&mut self) -> Result<(), <M::Port as AnalogMultiplexer>::Error> {
        self.selector.lock(|sel| sel.connect(self.channel))
    }
}

impl<'a, M> MuxChannel<'a, M>
where
    M: PortMutex,
    M::Port: Disconnect,
{
    pub fn disconnect(&mut self) -> Result<(), <M::Port as AnalogMultiplexer>::Error> {
        self.selector.lock(|sel| sel.disconnect(self.channel))
    }
}

impl<'a, M> ErrorType for MuxChannel<'a, M>
where
    M: PortMutex,
    M::Port: Connect + Disconnect,
{
    type Error = <M::Port as AnalogMultiplexer>::Error;
}

/// Drives the channel switch like a pin: high connects, low disconnects.
impl<'a, M> OutputPin for MuxChannel<'a, M>
where
    M: PortMutex,
    M::Port: Connect + Disconnect,
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.disconnect()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.connect()
    }
}
