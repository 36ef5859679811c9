//! Persisted bar state for single-shot mode.
//!
//! Each single-shot invocation renders one frame and exits. To draw a
//! continuous bar across invocations (elapsed time, throughput history,
//! spinner phase) the bar is saved after every frame and loaded again by the
//! next call. Stores are keyed by the instance ID from
//! [`instance_id`](super::instance_id).
//!
//! # Examples
//!
//! ```rust
//! use pbar::bar::Bar;
//! use pbar::state::{FileStateStore, StateStore};
//!
//! # fn example() -> pbar::Result<()> {
//! let dir = std::env::temp_dir().join("pbar-doc-example");
//! let store = FileStateStore::new(&dir);
//!
//! let mut bar = Bar::new(10);
//! bar.current = 4;
//! store.save(&bar, "job")?;
//! assert_eq!(store.load("job")?.map(|bar| bar.current), Some(4));
//!
//! store.delete("job")?;
//! assert!(store.load("job")?.is_none());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::bar::Bar;
use crate::error::Result;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage for bars between single-shot invocations.
pub trait StateStore {
    /// Load the bar saved under `id`, or `None` if there is none.
    fn load(&self, id: &str) -> Result<Option<Bar>>;
    /// Save `bar` under `id`, replacing any previous state.
    fn save(&self, bar: &Bar, id: &str) -> Result<()>;
    /// Forget the state saved under `id`. Missing state is not an error.
    fn delete(&self, id: &str) -> Result<()>;
}

/// Stores every bar as a JSON file in one directory.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    directory: PathBuf,
}

impl Default for FileStateStore {
    fn default() -> Self {
        Self::new(std::env::temp_dir())
    }
}

impl FileStateStore {
    /// Create a store keeping its files in `directory`.
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Gets the directory holding the state files.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the file holding the state for `id`.
    pub fn path(&self, id: &str) -> PathBuf {
        self.directory.join(format!("pbar-{id}.json"))
    }
}

impl StateStore for FileStateStore {
    fn load(&self, id: &str) -> Result<Option<Bar>> {
        let path = self.path(id);
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), "loaded bar state");
        Ok(Some(serde_json::from_slice(&data)?))
    }

    fn save(&self, bar: &Bar, id: &str) -> Result<()> {
        fs::create_dir_all(&self.directory)?;
        let path = self.path(id);
        fs::write(&path, serde_json::to_vec(bar)?)?;
        debug!(path = %path.display(), "saved bar state");
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        match fs::remove_file(self.path(id)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
