//! Rendering surface seam
//!
//! The widget toolkit draws; the core only publishes rows, labels and the
//! keyboard buffer, and only while it holds the display lock.

mod lock;
mod recording;

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use tracing::warn;

use crate::error::{Error, Result};
use crate::navigation::Row;

pub use lock::DisplayLock;
pub use recording::RecordingSurface;

/// What the core needs from the UI toolkit
pub trait Surface {
    fn acquire_lock(&mut self, timeout: Duration) -> bool;
    fn release_lock(&mut self);

    fn render_rows(&mut self, rows: &[Row]);
    /// Header text: the current path, or the active filter.
    fn render_label(&mut self, text: &str);
    fn render_text_buffer(&mut self, text: &str);

    /// Raise the modal keyboard overlay.
    fn show_keyboard(&mut self, _prompt: &str) {}
    fn hide_keyboard(&mut self) {}
}

/// Holds the display lock; released on drop.
pub struct SurfaceGuard<'a, U: Surface + ?Sized> {
    surface: &'a mut U,
}

/// Acquire the display lock within `timeout`.
pub fn lock<U: Surface + ?Sized>(
    surface: &mut U,
    timeout: Duration,
) -> Result<SurfaceGuard<'_, U>> {
    if !surface.acquire_lock(timeout) {
        warn!(?timeout, "display lock timed out");
        return Err(Error::LockTimeout { timeout });
    }
    Ok(SurfaceGuard { surface })
}

impl<U: Surface + ?Sized> Deref for SurfaceGuard<'_, U> {
    type Target = U;

    fn deref(&self) -> &U {
        self.surface
    }
}

impl<U: Surface + ?Sized> DerefMut for SurfaceGuard<'_, U> {
    fn deref_mut(&mut self) -> &mut U {
        self.surface
    }
}

impl<U: Surface + ?Sized> Drop for SurfaceGuard<'_, U> {
    fn drop(&mut self) {
        self.surface.release_lock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let mut surface = RecordingSurface::new();
        {
            let mut guard = lock(&mut surface, Duration::from_millis(10)).unwrap();
            guard.render_label("/sd");
            assert!(guard.lock_handle().is_held());
        }
        assert!(!surface.lock_handle().is_held());
        assert_eq!(surface.label(), "/sd");
        assert_eq!(surface.unlocked_renders(), 0);
    }

    #[test]
    fn test_lock_timeout() {
        let mut surface = RecordingSurface::new();
        let render_task = surface.lock_handle();
        assert!(render_task.try_acquire(Duration::ZERO));

        let err = lock(&mut surface, Duration::from_millis(5)).err();
        assert!(matches!(err, Some(Error::LockTimeout { .. })));
        render_task.release();
    }
}
