//! Storage access
//!
//! Split into modules for reduced complexity.

mod local;
mod memory;
pub mod path;

use std::io;

pub use local::LocalStorage;
pub use memory::MemoryStorage;

/// One raw directory entry as reported by storage
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

impl Entry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Classification of a single path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Directory,
    File,
    NotFound,
}

/// Finite, one-shot directory listing
pub type Listing<'a> = Box<dyn Iterator<Item = Entry> + 'a>;

/// The mounted volume the navigator browses.
///
/// Calls are synchronous and are made while the display lock is held.
pub trait Storage {
    fn is_mounted(&self) -> bool;

    /// List the entries of `path` in read order.
    fn list_directory(&self, path: &str) -> io::Result<Listing<'_>>;

    fn classify(&self, path: &str) -> Kind;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn is_mounted(&self) -> bool {
        (**self).is_mounted()
    }

    fn list_directory(&self, path: &str) -> io::Result<Listing<'_>> {
        (**self).list_directory(path)
    }

    fn classify(&self, path: &str) -> Kind {
        (**self).classify(path)
    }
}
