//! In-memory volume for headless hosts and tests

use std::cell::Cell;
use std::collections::HashMap;
use std::io;

use super::path::{self, SEPARATOR};
use super::{Entry, Kind, Listing, Storage};

/// A directory tree held in memory. Listings keep insertion order.
pub struct MemoryStorage {
    mounted: bool,
    dirs: HashMap<String, Vec<Entry>>,
    classify_calls: Cell<usize>,
    list_calls: Cell<usize>,
}

impl MemoryStorage {
    /// An empty, mounted volume containing only `/`.
    pub fn new() -> Self {
        let mut dirs = HashMap::new();
        dirs.insert(SEPARATOR.to_string(), Vec::new());
        Self {
            mounted: true,
            dirs,
            classify_calls: Cell::new(0),
            list_calls: Cell::new(0),
        }
    }

    pub fn with_dir(mut self, dir: &str) -> Self {
        self.add_dir(dir);
        self
    }

    pub fn with_file(mut self, file: &str) -> Self {
        self.add_file(file);
        self
    }

    /// Create `dir` and any missing ancestors.
    pub fn add_dir(&mut self, dir: &str) {
        let dir = path::normalize(dir);
        if self.dirs.contains_key(&dir) {
            return;
        }
        let parent = path::parent_within("/", &dir);
        self.add_dir(&parent);
        self.push_child(&parent, Entry::dir(path::file_name(&dir)));
        self.dirs.insert(dir, Vec::new());
    }

    pub fn add_file(&mut self, file: &str) {
        let file = path::normalize(file);
        let parent = path::parent_within("/", &file);
        self.add_dir(&parent);
        self.push_child(&parent, Entry::file(path::file_name(&file)));
    }

    /// Add a raw entry to `dir` without creating anything behind it, the
    /// way a damaged card can list names that fail to open.
    pub fn add_raw_entry(&mut self, dir: &str, entry: Entry) {
        let dir = path::normalize(dir);
        self.add_dir(&dir);
        if let Some(children) = self.dirs.get_mut(&dir) {
            children.push(entry);
        }
    }

    /// Remove a file or a whole subtree.
    pub fn remove(&mut self, target: &str) {
        let target = path::normalize(target);
        let parent = path::parent_within("/", &target);
        let name = path::file_name(&target).to_string();
        if let Some(children) = self.dirs.get_mut(&parent) {
            children.retain(|e| e.name != name);
        }
        self.dirs
            .retain(|dir, _| !(dir != "/" && path::is_within(&target, dir)));
    }

    pub fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }

    pub fn classify_calls(&self) -> usize {
        self.classify_calls.get()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    fn push_child(&mut self, dir: &str, entry: Entry) {
        if let Some(children) = self.dirs.get_mut(dir)
            && !children.iter().any(|e| e.name == entry.name)
        {
            children.push(entry);
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn list_directory(&self, dir: &str) -> io::Result<Listing<'_>> {
        self.list_calls.set(self.list_calls.get() + 1);
        let children = self
            .dirs
            .get(&path::normalize(dir))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, dir.to_string()))?;
        Ok(Box::new(children.iter().cloned()))
    }

    fn classify(&self, target: &str) -> Kind {
        self.classify_calls.set(self.classify_calls.get() + 1);
        let target = path::normalize(target);
        if self.dirs.contains_key(&target) {
            return Kind::Directory;
        }
        let parent = path::parent_within("/", &target);
        let name = path::file_name(&target);
        let exists = self
            .dirs
            .get(&parent)
            .is_some_and(|children| children.iter().any(|e| e.name == name && !e.is_dir));
        if exists { Kind::File } else { Kind::NotFound }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_parents_in_order() {
        let storage = MemoryStorage::new()
            .with_dir("/sd/docs")
            .with_file("/sd/a.txt")
            .with_file("/sd/docs/report.pdf");

        let root: Vec<Entry> = storage.list_directory("/").unwrap().collect();
        assert_eq!(root, vec![Entry::dir("sd")]);

        let sd: Vec<Entry> = storage.list_directory("/sd").unwrap().collect();
        assert_eq!(sd, vec![Entry::dir("docs"), Entry::file("a.txt")]);

        assert_eq!(storage.classify("/sd/docs"), Kind::Directory);
        assert_eq!(storage.classify("/sd/docs/report.pdf"), Kind::File);
        assert_eq!(storage.classify("/sd/nope"), Kind::NotFound);
        assert_eq!(storage.classify_calls(), 3);
        assert_eq!(storage.list_calls(), 2);
    }

    #[test]
    fn test_remove_subtree() {
        let mut storage = MemoryStorage::new()
            .with_file("/sd/docs/deep/x.txt")
            .with_dir("/sd/docsx");
        storage.remove("/sd/docs");

        assert_eq!(storage.classify("/sd/docs"), Kind::NotFound);
        assert_eq!(storage.classify("/sd/docs/deep"), Kind::NotFound);
        assert_eq!(storage.classify("/sd/docsx"), Kind::Directory);
        assert!(storage.list_directory("/sd/docs").is_err());
    }
}
