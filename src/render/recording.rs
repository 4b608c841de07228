//! Headless surface that keeps the last published frame

use std::time::Duration;

use super::{DisplayLock, Surface};
use crate::navigation::Row;

#[derive(Default)]
pub struct RecordingSurface {
    lock: DisplayLock,
    rows: Vec<Row>,
    label: String,
    text: String,
    keyboard: Option<String>,
    row_publishes: usize,
    unlocked_renders: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle on the same token, for simulating a busy render task.
    pub fn lock_handle(&self) -> DisplayLock {
        self.lock.clone()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Prompt of the keyboard overlay, if raised.
    pub fn keyboard(&self) -> Option<&str> {
        self.keyboard.as_deref()
    }

    pub fn row_publishes(&self) -> usize {
        self.row_publishes
    }

    /// Renders that arrived without the lock held. Always zero for a
    /// well-behaved caller.
    pub fn unlocked_renders(&self) -> usize {
        self.unlocked_renders
    }

    fn note_render(&mut self) {
        if !self.lock.is_held() {
            self.unlocked_renders += 1;
        }
    }
}

impl Surface for RecordingSurface {
    fn acquire_lock(&mut self, timeout: Duration) -> bool {
        self.lock.try_acquire(timeout)
    }

    fn release_lock(&mut self) {
        self.lock.release();
    }

    fn render_rows(&mut self, rows: &[Row]) {
        self.note_render();
        self.rows = rows.to_vec();
        self.row_publishes += 1;
    }

    fn render_label(&mut self, text: &str) {
        self.note_render();
        self.label = text.to_string();
    }

    fn render_text_buffer(&mut self, text: &str) {
        self.note_render();
        self.text = text.to_string();
    }

    fn show_keyboard(&mut self, prompt: &str) {
        self.note_render();
        self.keyboard = Some(prompt.to_string());
        self.text.clear();
    }

    fn hide_keyboard(&mut self) {
        self.note_render();
        self.keyboard = None;
    }
}
