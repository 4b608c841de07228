//! Panel state and event dispatch
//!
//! The panel owns the navigator and the keyboard and routes discrete
//! events from the toolkit to whichever of the two is in front.

mod search;

use tokio::sync::oneshot;
use tracing::debug;

use crate::config::Settings;
use crate::error::Result;
use crate::filesystem::Storage;
use crate::input::{Action, Event, Mode, handle_event};
use crate::keyboard::{Keyboard, Outcome};
use crate::navigation::Navigator;
use crate::render::Surface;

pub struct Panel<S: Storage> {
    pub navigator: Navigator<S>,
    pub keyboard: Keyboard,
    search_prompt: String,
    seed_with_filter: bool,
    // Completion of the search session, if one is up
    pending_search: Option<oneshot::Receiver<Outcome>>,
}

impl<S: Storage> Panel<S> {
    pub fn new(storage: S, settings: &Settings) -> Self {
        Self {
            navigator: Navigator::new(storage, settings),
            keyboard: Keyboard::new(settings),
            search_prompt: settings.keyboard.prompt.clone(),
            seed_with_filter: settings.keyboard.seed_with_filter,
            pending_search: None,
        }
    }

    /// Show the browser at `root_path`.
    pub fn open<U, F>(&mut self, ui: &mut U, root_path: &str, on_file_selected: F) -> Result<()>
    where
        U: Surface + ?Sized,
        F: FnMut(&str) + 'static,
    {
        self.navigator.open(ui, root_path, on_file_selected)
    }

    pub fn mode(&self) -> Mode {
        if self.keyboard.is_active() {
            Mode::Typing
        } else {
            Mode::Browsing
        }
    }

    pub fn handle<U: Surface + ?Sized>(&mut self, ui: &mut U, event: Event) -> Result<()> {
        let action = handle_event(self.mode(), event);
        debug!(?event, ?action, "event");

        let result = match action {
            Action::None => Ok(()),
            Action::Select(index) => self.navigator.select(ui, index),
            Action::NavigateUp => self.navigator.navigate_up(ui),
            Action::StartSearch => self.start_search(ui),
            Action::Press(key) => self.keyboard.press(ui, key),
            Action::Dismiss => self.keyboard.cancel(ui),
        };
        result?;
        self.collect_search(ui)
    }

    /// Tear down the keyboard, if up, before the panel goes away.
    pub fn close<U: Surface + ?Sized>(&mut self, ui: &mut U) {
        self.keyboard.destroy(ui);
        self.pending_search = None;
    }
}
