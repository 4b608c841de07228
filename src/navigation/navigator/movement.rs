//! Moving between directories and picking files

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::filesystem::{Kind, Storage, path};
use crate::navigation::RowKind;
use crate::render::{self, Surface};

use super::Navigator;

impl<S: Storage> Navigator<S> {
    /// Open the entry `name` of the current directory.
    ///
    /// Directories become the current path; files go to the file callback
    /// and leave browsing state alone.
    pub fn navigate_into<U: Surface + ?Sized>(&mut self, ui: &mut U, name: &str) -> Result<()> {
        let name = path::trim_trailing_separators(name);
        if !path::is_plain_name(name) {
            return Err(Error::InvalidName(name.to_string()));
        }
        if !self.open {
            return Ok(());
        }

        let mut guard = render::lock(ui, self.lock_timeout)?;

        if !self.storage.is_mounted() {
            self.refresh_locked(&mut *guard);
            return Ok(());
        }

        let target = path::join(&self.current_path, name);
        match self.storage.classify(&target) {
            Kind::Directory => {
                info!(path = %target, "entering directory");
                self.current_path = target;
                self.filter.clear();
                self.refresh_locked(&mut *guard);
            }
            Kind::File => {
                drop(guard);
                info!(path = %target, "file selected");
                if let Some(on_file_selected) = self.on_file_selected.as_mut() {
                    on_file_selected(&target);
                }
            }
            Kind::NotFound => {
                warn!(path = %target, "entry vanished before it could be opened");
                self.refresh_locked(&mut *guard);
            }
        }
        Ok(())
    }

    /// Go up one level, never above the root.
    pub fn navigate_up<U: Surface + ?Sized>(&mut self, ui: &mut U) -> Result<()> {
        if !self.open {
            return Ok(());
        }

        let mut guard = render::lock(ui, self.lock_timeout)?;
        if self.current_path == self.root {
            debug!("already at root");
            return Ok(());
        }

        self.current_path = path::parent_within(&self.root, &self.current_path);
        self.filter.clear();
        info!(path = %self.current_path, "leaving directory");
        self.refresh_locked(&mut *guard);
        Ok(())
    }

    /// Act on the row at `index` of the last published list.
    pub fn select<U: Surface + ?Sized>(&mut self, ui: &mut U, index: usize) -> Result<()> {
        let Some(row) = self.rows.get(index) else {
            debug!(index, "tap outside the list");
            return Ok(());
        };

        match row.kind {
            RowKind::Parent => self.navigate_up(ui),
            RowKind::Unavailable => self.refresh(ui),
            RowKind::Directory | RowKind::File => {
                let name = row.name.clone();
                self.navigate_into(ui, &name)
            }
        }
    }
}
