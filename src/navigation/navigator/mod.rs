//! File navigator
//!
//! Split into submodules for reduced complexity.

mod filter;
mod listing;
mod movement;

use std::time::Duration;

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::Result;
use crate::filesystem::{Storage, path};
use crate::render::{self, Surface};

use super::Row;

/// Invoked with the full path of a file the user picked
pub type FileCallback = Box<dyn FnMut(&str)>;

/// Browser state for one volume
///
/// `current_path` is always `root` or below it. Every operation runs with
/// the surface's display lock held and gives up with
/// [`Error::LockTimeout`](crate::Error::LockTimeout) before touching any
/// state if the lock can't be had.
pub struct Navigator<S: Storage> {
    storage: S,
    root: String,
    current_path: String,
    filter: String,
    rows: Vec<Row>,
    on_file_selected: Option<FileCallback>,
    open: bool,
    show_hidden: bool,
    max_entries: usize,
    lock_timeout: Duration,
}

impl<S: Storage> Navigator<S> {
    pub fn new(storage: S, settings: &Settings) -> Self {
        let root = path::normalize(&settings.root);
        Self {
            storage,
            current_path: root.clone(),
            root,
            filter: String::new(),
            rows: Vec::new(),
            on_file_selected: None,
            open: false,
            show_hidden: settings.show_hidden,
            max_entries: settings.max_entries,
            lock_timeout: settings.lock_timeout,
        }
    }

    /// Show the browser at `root_path` and register the file callback.
    /// An empty `root_path` keeps the previous root.
    pub fn open<U, F>(&mut self, ui: &mut U, root_path: &str, on_file_selected: F) -> Result<()>
    where
        U: Surface + ?Sized,
        F: FnMut(&str) + 'static,
    {
        let mut guard = render::lock(ui, self.lock_timeout)?;

        if !root_path.trim().is_empty() {
            self.root = path::normalize(root_path);
        }
        self.current_path = self.root.clone();
        self.filter.clear();
        self.on_file_selected = Some(Box::new(on_file_selected));
        self.open = true;
        info!(root = %self.root, "navigator opened");

        self.refresh_locked(&mut *guard);
        Ok(())
    }

    /// Point the browser at another mount point, keeping the callback.
    pub fn set_root<U: Surface + ?Sized>(&mut self, ui: &mut U, new_root: &str) -> Result<()> {
        if new_root.trim().is_empty() {
            return Ok(());
        }
        if !self.open {
            self.root = path::normalize(new_root);
            self.current_path = self.root.clone();
            self.filter.clear();
            return Ok(());
        }

        let mut guard = render::lock(ui, self.lock_timeout)?;
        self.root = path::normalize(new_root);
        self.current_path = self.root.clone();
        self.filter.clear();
        info!(root = %self.root, "navigator root changed");

        self.refresh_locked(&mut *guard);
        Ok(())
    }

    /// Re-list the current directory and publish it.
    pub fn refresh<U: Surface + ?Sized>(&mut self, ui: &mut U) -> Result<()> {
        if !self.open {
            debug!("refresh before open ignored");
            return Ok(());
        }
        let mut guard = render::lock(ui, self.lock_timeout)?;
        self.refresh_locked(&mut *guard);
        Ok(())
    }

    fn refresh_locked<U: Surface + ?Sized>(&mut self, ui: &mut U) {
        self.rows = self.build_rows();
        ui.render_label(&self.label());
        ui.render_rows(&self.rows);
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Rows as last published
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}
