//! On-screen keyboard input sessions
//!
//! At most one session is live. Every session ends in exactly one call of
//! its completion callback, whether the user submits, cancels, a new
//! session replaces it, or the host tears it down.

mod session;

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::input::Key;
use crate::render::{self, Surface};

pub use session::{DoneCallback, Outcome};
use session::Session;

pub struct Keyboard {
    session: Option<Session>,
    max_length: usize,
    default_prompt: String,
    lock_timeout: Duration,
}

impl Keyboard {
    pub fn new(settings: &Settings) -> Self {
        Self {
            session: None,
            max_length: settings.keyboard.max_length,
            default_prompt: settings.keyboard.prompt.clone(),
            lock_timeout: settings.lock_timeout,
        }
    }

    /// Raise the keyboard with an empty buffer, replacing (and cancelling)
    /// any session already up.
    ///
    /// If the lock can't be had nothing changes: the prior session stays up
    /// and `on_done` is dropped without being called.
    pub fn start<U, F>(&mut self, ui: &mut U, prompt: Option<&str>, on_done: F) -> Result<()>
    where
        U: Surface + ?Sized,
        F: FnOnce(Outcome) + 'static,
    {
        let mut guard = render::lock(ui, self.lock_timeout)?;

        let prior = self.session.take();
        if prior.is_some() {
            guard.hide_keyboard();
        }

        let prompt = prompt.unwrap_or(&self.default_prompt).to_string();
        guard.show_keyboard(&prompt);
        guard.render_text_buffer("");
        info!(prompt = %prompt, "keyboard session started");
        self.session = Some(Session::new(prompt, Box::new(on_done)));

        drop(guard);
        if prior.is_some() {
            debug!("previous keyboard session replaced");
        }
        drop(prior);
        Ok(())
    }

    /// Replace the buffer, clipped to capacity. `None` clears it.
    pub fn set_input<U: Surface + ?Sized>(&mut self, ui: &mut U, text: Option<&str>) -> Result<()> {
        if self.session.is_none() {
            return Ok(());
        }
        let mut guard = render::lock(ui, self.lock_timeout)?;
        let max_length = self.max_length;
        if let Some(session) = self.session.as_mut() {
            session.buffer = text
                .unwrap_or_default()
                .chars()
                .take(max_length)
                .collect();
            guard.render_text_buffer(&session.buffer);
        }
        Ok(())
    }

    /// Append `c` unless the buffer is full; a full buffer ignores it.
    pub fn press_char<U: Surface + ?Sized>(&mut self, ui: &mut U, c: char) -> Result<()> {
        if self.session.is_none() {
            return Ok(());
        }
        let mut guard = render::lock(ui, self.lock_timeout)?;
        let max_length = self.max_length;
        if let Some(session) = self.session.as_mut() {
            if session.len() < max_length {
                session.buffer.push(c);
                guard.render_text_buffer(&session.buffer);
            } else {
                debug!(max_length, "keyboard buffer full");
            }
        }
        Ok(())
    }

    pub fn press_backspace<U: Surface + ?Sized>(&mut self, ui: &mut U) -> Result<()> {
        if self.session.is_none() {
            return Ok(());
        }
        let mut guard = render::lock(ui, self.lock_timeout)?;
        if let Some(session) = self.session.as_mut()
            && session.buffer.pop().is_some()
        {
            guard.render_text_buffer(&session.buffer);
        }
        Ok(())
    }

    /// Finish with the buffer contents.
    pub fn submit<U: Surface + ?Sized>(&mut self, ui: &mut U) -> Result<()> {
        self.finish(ui, true)
    }

    pub fn cancel<U: Surface + ?Sized>(&mut self, ui: &mut U) -> Result<()> {
        self.finish(ui, false)
    }

    /// The callback runs after the overlay is gone and the lock released,
    /// so it may start another session straight away.
    fn finish<U: Surface + ?Sized>(&mut self, ui: &mut U, submitted: bool) -> Result<()> {
        if self.session.is_none() {
            return Ok(());
        }
        let mut guard = render::lock(ui, self.lock_timeout)?;
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        guard.hide_keyboard();
        drop(guard);

        let outcome = if submitted {
            Outcome::Submitted(session.buffer.clone())
        } else {
            Outcome::Cancelled
        };
        info!(submitted, "keyboard session finished");
        session.finish(outcome);
        Ok(())
    }

    /// Tear down whatever is up. Safe with no session; a pending callback
    /// is reported as cancelled. The session is gone afterwards even if the
    /// overlay could not be hidden.
    pub fn destroy<U: Surface + ?Sized>(&mut self, ui: &mut U) {
        let Some(session) = self.session.take() else {
            return;
        };
        match render::lock(ui, self.lock_timeout) {
            Ok(mut guard) => guard.hide_keyboard(),
            Err(e) => warn!(error = %e, "keyboard overlay left on screen"),
        }
        info!("keyboard session destroyed");
        session.finish(Outcome::Cancelled);
    }

    pub fn press<U: Surface + ?Sized>(&mut self, ui: &mut U, key: Key) -> Result<()> {
        debug!(?key, "key pressed");
        match key {
            Key::Char(c) => self.press_char(ui, c),
            Key::Space => self.press_char(ui, ' '),
            Key::Backspace => self.press_backspace(ui),
            Key::Enter => self.submit(ui),
            Key::Cancel => self.cancel(ui),
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn buffer(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.buffer.as_str())
    }

    pub fn prompt(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.prompt.as_str())
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::Error;
    use crate::render::RecordingSurface;

    type Calls = Rc<RefCell<Vec<Outcome>>>;

    fn recorder() -> (Calls, impl FnOnce(Outcome) + 'static) {
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |outcome: Outcome| sink.borrow_mut().push(outcome))
    }

    fn keyboard_with_capacity(max_length: usize) -> Keyboard {
        let mut settings = Settings::default();
        settings.keyboard.max_length = max_length;
        Keyboard::new(&settings)
    }

    #[test]
    fn test_scenario_type_backspace_submit() {
        let mut ui = RecordingSurface::new();
        let mut kb = Keyboard::new(&Settings::default());
        let (calls, on_done) = recorder();

        kb.start(&mut ui, Some("Enter filename:"), on_done).unwrap();
        assert_eq!(ui.keyboard(), Some("Enter filename:"));
        for c in "abc".chars() {
            kb.press_char(&mut ui, c).unwrap();
        }
        kb.press_backspace(&mut ui).unwrap();
        assert_eq!(kb.buffer(), Some("ab"));
        assert_eq!(ui.text(), "ab");

        kb.submit(&mut ui).unwrap();
        assert_eq!(*calls.borrow(), vec![Outcome::Submitted("ab".to_string())]);
        assert!(!kb.is_active());
        assert_eq!(ui.keyboard(), None);
        assert_eq!(ui.unlocked_renders(), 0);
    }

    #[test]
    fn test_default_prompt() {
        let mut ui = RecordingSurface::new();
        let mut kb = Keyboard::new(&Settings::default());
        kb.start(&mut ui, None, |_| {}).unwrap();
        assert_eq!(kb.prompt(), Some("Search..."));
    }

    #[test]
    fn test_capacity_clamp() {
        let mut ui = RecordingSurface::new();
        let mut kb = keyboard_with_capacity(3);
        kb.start(&mut ui, None, |_| {}).unwrap();

        for c in "abcdef".chars() {
            kb.press(&mut ui, Key::Char(c)).unwrap();
            assert!(kb.buffer().unwrap().chars().count() <= kb.max_length());
        }
        kb.press(&mut ui, Key::Space).unwrap();
        assert_eq!(kb.buffer(), Some("abc"));
    }

    #[test]
    fn test_capacity_counts_characters() {
        let mut ui = RecordingSurface::new();
        let mut kb = keyboard_with_capacity(2);
        kb.start(&mut ui, None, |_| {}).unwrap();
        for c in ['é', 'ß', 'ü'] {
            kb.press_char(&mut ui, c).unwrap();
        }
        assert_eq!(kb.buffer(), Some("éß"));
    }

    #[test]
    fn test_backspace_on_empty() {
        let mut ui = RecordingSurface::new();
        let mut kb = Keyboard::new(&Settings::default());
        kb.start(&mut ui, None, |_| {}).unwrap();
        kb.press_backspace(&mut ui).unwrap();
        assert_eq!(kb.buffer(), Some(""));
    }

    #[test]
    fn test_set_input_clips_and_clears() {
        let mut ui = RecordingSurface::new();
        let mut kb = keyboard_with_capacity(4);
        kb.start(&mut ui, None, |_| {}).unwrap();

        kb.set_input(&mut ui, Some("report.pdf")).unwrap();
        assert_eq!(kb.buffer(), Some("repo"));
        assert_eq!(ui.text(), "repo");

        kb.set_input(&mut ui, None).unwrap();
        assert_eq!(kb.buffer(), Some(""));
    }

    #[test]
    fn test_cancel_reports_no_text() {
        let mut ui = RecordingSurface::new();
        let mut kb = Keyboard::new(&Settings::default());
        let (calls, on_done) = recorder();
        kb.start(&mut ui, None, on_done).unwrap();
        kb.press(&mut ui, Key::Char('x')).unwrap();
        kb.press(&mut ui, Key::Cancel).unwrap();

        let calls = calls.borrow();
        assert_eq!(*calls, vec![Outcome::Cancelled]);
        assert_eq!(calls[0].text(), None);
        assert!(!calls[0].is_submitted());
    }

    #[test]
    fn test_exactly_once_per_session() {
        let mut ui = RecordingSurface::new();
        let mut kb = Keyboard::new(&Settings::default());

        let (submitted, on_done) = recorder();
        kb.start(&mut ui, None, on_done).unwrap();
        kb.press(&mut ui, Key::Enter).unwrap();
        kb.submit(&mut ui).unwrap();
        kb.cancel(&mut ui).unwrap();
        kb.destroy(&mut ui);
        assert_eq!(submitted.borrow().len(), 1);

        let (cancelled, on_done) = recorder();
        kb.start(&mut ui, None, on_done).unwrap();
        kb.cancel(&mut ui).unwrap();
        kb.destroy(&mut ui);
        assert_eq!(*cancelled.borrow(), vec![Outcome::Cancelled]);

        let (destroyed, on_done) = recorder();
        kb.start(&mut ui, None, on_done).unwrap();
        kb.destroy(&mut ui);
        kb.destroy(&mut ui);
        assert_eq!(*destroyed.borrow(), vec![Outcome::Cancelled]);
    }

    #[test]
    fn test_new_session_cancels_previous() {
        let mut ui = RecordingSurface::new();
        let mut kb = Keyboard::new(&Settings::default());
        let (first, on_first) = recorder();
        let (second, on_second) = recorder();

        kb.start(&mut ui, Some("first"), on_first).unwrap();
        kb.press_char(&mut ui, 'a').unwrap();
        kb.start(&mut ui, Some("second"), on_second).unwrap();

        assert_eq!(*first.borrow(), vec![Outcome::Cancelled]);
        assert!(second.borrow().is_empty());
        assert_eq!(kb.buffer(), Some(""));
        assert_eq!(ui.keyboard(), Some("second"));
    }

    #[test]
    fn test_start_lock_timeout_keeps_prior_session() {
        let mut ui = RecordingSurface::new();
        let mut kb = Keyboard::new(&Settings::default());
        let (first, on_first) = recorder();
        let (second, on_second) = recorder();
        kb.start(&mut ui, Some("first"), on_first).unwrap();

        let render_task = ui.lock_handle();
        assert!(render_task.try_acquire(Duration::ZERO));
        let err = kb.start(&mut ui, Some("second"), on_second).unwrap_err();
        render_task.release();

        assert!(matches!(err, Error::LockTimeout { .. }));
        assert_eq!(kb.prompt(), Some("first"));
        assert!(first.borrow().is_empty());
        assert!(second.borrow().is_empty());
    }

    #[test]
    fn test_destroy_without_lock_still_completes() {
        let mut ui = RecordingSurface::new();
        let mut kb = Keyboard::new(&Settings::default());
        let (calls, on_done) = recorder();
        kb.start(&mut ui, None, on_done).unwrap();

        let render_task = ui.lock_handle();
        assert!(render_task.try_acquire(Duration::ZERO));
        kb.destroy(&mut ui);
        render_task.release();

        assert!(!kb.is_active());
        assert_eq!(*calls.borrow(), vec![Outcome::Cancelled]);
    }

    #[test]
    fn test_finish_without_lock_keeps_session() {
        let mut ui = RecordingSurface::new();
        let mut kb = Keyboard::new(&Settings::default());
        let (calls, on_done) = recorder();
        kb.start(&mut ui, None, on_done).unwrap();
        kb.set_input(&mut ui, Some("draft")).unwrap();

        let render_task = ui.lock_handle();
        assert!(render_task.try_acquire(Duration::ZERO));
        let err = kb.submit(&mut ui).unwrap_err();
        assert!(matches!(err, Error::LockTimeout { .. }));
        let err = kb.cancel(&mut ui).unwrap_err();
        assert!(matches!(err, Error::LockTimeout { .. }));
        render_task.release();

        assert!(kb.is_active());
        assert_eq!(kb.buffer(), Some("draft"));
        assert!(calls.borrow().is_empty());

        kb.submit(&mut ui).unwrap();
        assert_eq!(*calls.borrow(), vec![Outcome::Submitted("draft".to_string())]);
    }

    #[test]
    fn test_drop_completes_pending_session() {
        let mut ui = RecordingSurface::new();
        let (calls, on_done) = recorder();
        {
            let mut kb = Keyboard::new(&Settings::default());
            kb.start(&mut ui, None, on_done).unwrap();
        }
        assert_eq!(*calls.borrow(), vec![Outcome::Cancelled]);
    }

    #[test]
    fn test_callback_may_start_next_session() {
        let mut ui = RecordingSurface::new();
        let mut kb = Keyboard::new(&Settings::default());
        let lock_free = Rc::new(RefCell::new(None));
        let seen = Rc::clone(&lock_free);
        let handle = ui.lock_handle();

        kb.start(&mut ui, None, move |_| {
            *seen.borrow_mut() = Some(!handle.is_held());
        })
        .unwrap();
        kb.submit(&mut ui).unwrap();

        assert_eq!(*lock_free.borrow(), Some(true));
    }

    #[test]
    fn test_keys_without_session_are_ignored() {
        let mut ui = RecordingSurface::new();
        let mut kb = Keyboard::new(&Settings::default());
        kb.press(&mut ui, Key::Char('a')).unwrap();
        kb.press(&mut ui, Key::Enter).unwrap();
        kb.destroy(&mut ui);
        assert!(!kb.is_active());
        assert_eq!(ui.text(), "");
    }
}
