//! File navigator and on-screen keyboard logic for a touch panel.
//!
//! The toolkit draws and hit-tests; this crate decides what directory is
//! current, what the list shows, and what the keyboard buffer holds. Both
//! sides meet at the [`Surface`](render::Surface) and
//! [`Storage`](filesystem::Storage) traits.

pub mod app;
pub mod config;
mod error;
pub mod filesystem;
pub mod input;
pub mod keyboard;
pub mod navigation;
pub mod render;

pub use app::Panel;
pub use config::Settings;
pub use error::{Error, Result};
pub use keyboard::{Keyboard, Outcome};
pub use navigation::{Navigator, Row, RowKind};
