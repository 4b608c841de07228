//! Building the display list

use tracing::{info, warn};

use crate::filesystem::{Entry, Storage};
use crate::navigation::Row;

use super::Navigator;
use super::filter::matches_filter;

impl<S: Storage> Navigator<S> {
    pub(super) fn build_rows(&self) -> Vec<Row> {
        if !self.storage.is_mounted() {
            warn!(path = %self.current_path, "storage not mounted");
            return vec![Row::unavailable()];
        }

        let mut rows = Vec::new();
        if self.current_path != self.root {
            rows.push(Row::parent());
        }

        let listing = match self.storage.list_directory(&self.current_path) {
            Ok(listing) => listing,
            Err(e) => {
                warn!(path = %self.current_path, error = %e, "cannot open directory");
                return rows;
            }
        };

        let needle = self.filter.to_lowercase();
        rows.extend(
            listing
                .filter(|e| self.is_listable(e))
                .filter(|e| matches_filter(&e.name, &needle))
                .take(self.max_entries)
                .map(Row::from),
        );

        info!(
            path = %self.current_path,
            count = rows.iter().filter(|r| !r.is_marker()).count(),
            "refreshed"
        );
        rows
    }

    fn is_listable(&self, entry: &Entry) -> bool {
        if entry.name.is_empty() || entry.name == "." || entry.name == ".." {
            return false;
        }
        self.show_hidden || !entry.name.starts_with('.')
    }
}
