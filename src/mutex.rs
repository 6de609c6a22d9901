//! A generic “mutex” trait with a `RefCell` implementation and, behind the
//! `critical-section` feature, one that is safe to use from interrupts.

use core::cell::RefCell;

/// Common interface for mutex-like wrappers around a channel selector.
pub trait PortMutex {
    type Port;

    fn create(port: Self::Port) -> Self;

    fn lock<R, F: FnOnce(&mut Self::Port) -> R>(&self, f: F) -> R;

    fn into_inner(self) -> Self::Port;
}

/// A simple single-threaded “mutex” using `RefCell`.
///
/// Suitable when every user of the mux runs in the same execution context.
impl<T> PortMutex for RefCell<T> {
    type Port = T;

    fn create(port: Self::Port) -> Self {
        RefCell::new(port)
    }

    fn lock<R, F: FnOnce(&mut Self::Port) -> R>(&self, f: F) -> R {
        let mut borrowed = self.borrow_mut();
        f(&mut borrowed)
    }

    fn into_inner(self) -> Self::Port {
        RefCell::into_inner(self)
    }
}

/// Serializes access by running every operation inside a critical section.
#[cfg(feature = "critical-section")]
impl<T> PortMutex for critical_section::Mutex<RefCell<T>> {
    type Port = T;

    fn create(port: Self::Port) -> Self {
        critical_section::Mutex::new(RefCell::new(port))
    }

    fn lock<R, F: FnOnce(&mut Self::Port) -> R>(&self, f: F) -> R {
        critical_section::with(|cs| f(&mut self.borrow_ref_mut(cs)))
    }

    fn into_inner(self) -> Self::Port {
        critical_section::Mutex::into_inner(self).into_inner()
    }
}
