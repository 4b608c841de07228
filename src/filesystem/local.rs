//! Storage backed by the host filesystem

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use super::{Entry, Kind, Listing, Storage};

/// Paths handed to this provider are host paths; on the device the VFS
/// mounts the card at `mount_point` so the two coincide.
pub struct LocalStorage {
    mount_point: PathBuf,
    device_check: bool,
}

impl LocalStorage {
    pub fn new(mount_point: impl Into<PathBuf>) -> Self {
        Self {
            mount_point: mount_point.into(),
            device_check: false,
        }
    }

    /// Only report the volume as mounted when the mount point lives on a
    /// different device than its parent directory.
    pub fn with_device_check(mut self, enabled: bool) -> Self {
        self.device_check = enabled;
        self
    }

    pub fn mount_point(&self) -> &Path {
        &self.mount_point
    }

    #[cfg(unix)]
    fn is_separate_device(&self) -> bool {
        use std::os::unix::fs::MetadataExt;

        let Some(parent) = self.mount_point.parent() else {
            return true;
        };
        match (fs::metadata(&self.mount_point), fs::metadata(parent)) {
            (Ok(mount), Ok(parent)) => mount.dev() != parent.dev(),
            _ => false,
        }
    }

    #[cfg(not(unix))]
    fn is_separate_device(&self) -> bool {
        true
    }
}

fn entry_from_dir_entry(entry: DirEntry) -> Entry {
    let name = entry.file_name().to_string_lossy().into_owned();
    let is_dir = entry.path().is_dir();
    Entry { name, is_dir }
}

impl Storage for LocalStorage {
    fn is_mounted(&self) -> bool {
        if !self.mount_point.is_dir() {
            return false;
        }
        !self.device_check || self.is_separate_device()
    }

    fn list_directory(&self, path: &str) -> io::Result<Listing<'_>> {
        let read_dir = fs::read_dir(path)?;
        Ok(Box::new(
            read_dir.filter_map(|e| e.ok()).map(entry_from_dir_entry),
        ))
    }

    fn classify(&self, path: &str) -> Kind {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Kind::Directory,
            Ok(_) => Kind::File,
            Err(_) => Kind::NotFound,
        }
    }
}
