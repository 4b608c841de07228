//! Display rows

use crate::filesystem::Entry;

pub const PARENT_NAME: &str = "..";
pub const UNAVAILABLE_TEXT: &str = "SD Not Mounted";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// Go up one level
    Parent,
    Directory,
    File,
    /// Storage is gone; nothing here can be opened
    Unavailable,
}

/// One published list row. Selection works from `name`, never from what
/// the toolkit ended up drawing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub kind: RowKind,
}

impl Row {
    pub fn parent() -> Self {
        Self {
            name: PARENT_NAME.to_string(),
            kind: RowKind::Parent,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            name: UNAVAILABLE_TEXT.to_string(),
            kind: RowKind::Unavailable,
        }
    }

    /// True for the synthetic parent and placeholder rows.
    pub fn is_marker(&self) -> bool {
        matches!(self.kind, RowKind::Parent | RowKind::Unavailable)
    }
}

impl From<Entry> for Row {
    fn from(entry: Entry) -> Self {
        let kind = if entry.is_dir {
            RowKind::Directory
        } else {
            RowKind::File
        };
        Self {
            name: entry.name,
            kind,
        }
    }
}
