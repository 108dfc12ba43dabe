//! Cooperative cancellation signals.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Polled, advisory stop request. Implementations must be cheap to query.
///
/// Implemented for `AtomicBool` (set to request a stop), `Arc` of any signal,
/// and plain `Fn() -> bool` closures.
pub trait CancelSignal {
    fn is_cancelled(&self) -> bool;
}

/// Signal that never fires.
#[derive(Clone, Copy, Debug, Default)]
pub struct Never;

impl CancelSignal for Never {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl CancelSignal for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::SeqCst)
    }
}

impl<T: CancelSignal + ?Sized> CancelSignal for Arc<T> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<F: Fn() -> bool> CancelSignal for F {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
