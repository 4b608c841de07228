//! Navigation components for the file browser
//!
//! Split into modules to reduce complexity.

mod navigator;
mod row;

pub use navigator::{FileCallback, Navigator};
pub use row::{PARENT_NAME, Row, RowKind, UNAVAILABLE_TEXT};
