//! Bounded-wait display token

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;

/// A non-reentrant token shared between the UI task and whatever flushes
/// the display. Clones refer to the same token.
#[derive(Clone, Default)]
pub struct DisplayLock {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl DisplayLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait up to `timeout` for the token. Returns false on timeout.
    pub fn try_acquire(&self, timeout: Duration) -> bool {
        let (held, released) = &*self.inner;
        let guard = held.lock().unwrap_or_else(PoisonError::into_inner);
        let (mut guard, result) = released
            .wait_timeout_while(guard, timeout, |held| *held)
            .unwrap_or_else(PoisonError::into_inner);
        if result.timed_out() && *guard {
            return false;
        }
        *guard = true;
        true
    }

    pub fn release(&self) {
        let (held, released) = &*self.inner;
        let mut guard = held.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = false;
        released.notify_one();
    }

    pub fn is_held(&self) -> bool {
        let (held, _) = &*self.inner;
        *held.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
