//! Durable rating/notes store for the CLI frontend.
//!
//! Two scalar slots — the last rating and the last free-text note —
//! read once at startup and written on every change. Writes are
//! fire-and-forget with last-write-wins semantics; a failed write is
//! reported to the caller but never affects recipe state.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{DialerError, Result};

/// Highest rating on the 0-10 scale.
pub const MAX_RATING: u8 = 10;

/// The persisted record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionNotes {
    /// Last rating, 0-10
    pub rating: u8,
    /// Last free-text note
    pub notes: String,
}

/// JSON-file-backed store for [`SessionNotes`].
pub struct NotesStore {
    path: PathBuf,
}

impl NotesStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record, falling back to defaults when the file is
    /// missing or unreadable. A corrupt file is logged and treated as
    /// empty rather than surfaced.
    pub fn load(&self) -> SessionNotes {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return SessionNotes::default(),
            Err(e) => {
                let err = DialerError::store_read(self.path.display().to_string(), e);
                warn!("{err}; starting fresh");
                return SessionNotes::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(notes) => notes,
            Err(e) => {
                warn!("notes store {} is corrupt ({e}), starting fresh", self.path.display());
                SessionNotes::default()
            }
        }
    }

    /// Write the record. Last write wins; losing the most recent write
    /// on abrupt shutdown is acceptable.
    pub fn save(&self, notes: &SessionNotes) -> Result<()> {
        let raw = serde_json::to_string_pretty(notes)?;
        fs::write(&self.path, raw)
            .map_err(|e| DialerError::store_write(self.path.display().to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dialer-test-{name}-{}.json", std::process::id()))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let store = NotesStore::new(temp_path("missing"));
        let notes = store.load();
        assert_eq!(notes, SessionNotes::default());
    }

    #[test]
    fn test_save_and_reload() {
        let path = temp_path("roundtrip");
        let store = NotesStore::new(&path);
        let notes = SessionNotes {
            rating: 8,
            notes: "juicy, a touch hollow".to_string(),
        };
        store.save(&notes).unwrap();
        assert_eq!(store.load(), notes);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json at all").unwrap();
        let store = NotesStore::new(&path);
        assert_eq!(store.load(), SessionNotes::default());
        let _ = fs::remove_file(&path);
    }
}
