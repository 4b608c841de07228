//! Search keyboard wiring

use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::debug;

use crate::error::Result;
use crate::filesystem::Storage;
use crate::keyboard::Outcome;
use crate::render::Surface;

use super::Panel;

impl<S: Storage> Panel<S> {
    /// Raise the keyboard to collect a filter for the current directory.
    pub fn start_search<U: Surface + ?Sized>(&mut self, ui: &mut U) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.keyboard.start(ui, Some(self.search_prompt.as_str()), move |outcome| {
            let _ = tx.send(outcome);
        })?;
        self.pending_search = Some(rx);

        if self.seed_with_filter && !self.navigator.filter().is_empty() {
            let seed = self.navigator.filter().to_string();
            self.keyboard.set_input(ui, Some(&seed))?;
        }
        Ok(())
    }

    /// Apply a finished search session. Submitting sets the filter (empty
    /// text clears it); cancelling leaves the listing as it was.
    pub(super) fn collect_search<U: Surface + ?Sized>(&mut self, ui: &mut U) -> Result<()> {
        let Some(rx) = self.pending_search.as_mut() else {
            return Ok(());
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.pending_search = None;
                match outcome {
                    Outcome::Submitted(text) => self.navigator.apply_filter(ui, &text),
                    Outcome::Cancelled => {
                        debug!("search cancelled");
                        Ok(())
                    }
                }
            }
            Err(TryRecvError::Empty) => Ok(()),
            Err(TryRecvError::Closed) => {
                self.pending_search = None;
                Ok(())
            }
        }
    }
}
