//! A single keyboard session and its completion

/// How a session ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Submitted(String),
    Cancelled,
}

impl Outcome {
    /// The submitted text; `None` when cancelled.
    pub fn text(&self) -> Option<&str> {
        match self {
            Outcome::Submitted(text) => Some(text),
            Outcome::Cancelled => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, Outcome::Submitted(_))
    }
}

pub type DoneCallback = Box<dyn FnOnce(Outcome)>;

/// Buffer plus the pending completion. Dropping a session that was never
/// finished reports it as cancelled, so the callback runs exactly once.
pub(super) struct Session {
    pub(super) prompt: String,
    pub(super) buffer: String,
    on_done: Option<DoneCallback>,
}

impl Session {
    pub(super) fn new(prompt: String, on_done: DoneCallback) -> Self {
        Self {
            prompt,
            buffer: String::new(),
            on_done: Some(on_done),
        }
    }

    pub(super) fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub(super) fn finish(mut self, outcome: Outcome) {
        if let Some(on_done) = self.on_done.take() {
            on_done(outcome);
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(on_done) = self.on_done.take() {
            on_done(Outcome::Cancelled);
        }
    }
}
