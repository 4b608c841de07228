//! Filtering the current directory view

use tracing::debug;

use crate::error::Result;
use crate::filesystem::Storage;
use crate::render::{self, Surface};

use super::Navigator;

/// Case-insensitive substring match; `needle_lower` must already be
/// lowercase. An empty needle matches everything.
pub(super) fn matches_filter(name: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || name.to_lowercase().contains(needle_lower)
}

impl<S: Storage> Navigator<S> {
    /// Narrow the current listing to names containing `text`. Empty text
    /// clears the filter. The filter lasts until the directory changes.
    pub fn apply_filter<U: Surface + ?Sized>(&mut self, ui: &mut U, text: &str) -> Result<()> {
        if !self.open {
            return Ok(());
        }

        let mut guard = render::lock(ui, self.lock_timeout)?;
        self.filter = text.to_string();
        debug!(filter = %self.filter, "filter applied");
        self.refresh_locked(&mut *guard);
        Ok(())
    }

    pub fn clear_filter<U: Surface + ?Sized>(&mut self, ui: &mut U) -> Result<()> {
        self.apply_filter(ui, "")
    }

    /// Header text for the current view
    pub fn label(&self) -> String {
        if self.filter.is_empty() {
            self.current_path.clone()
        } else {
            format!("Search: {}", self.filter)
        }
    }
}
