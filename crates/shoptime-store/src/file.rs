//! # File Adapter
//!
//! One JSON document per key inside a data directory.
//!
//! ## Layout
//! ```text
//! <data_dir>/
//! ├── session.json
//! ├── cart.json
//! └── favorites.json
//! ```
//!
//! ## Write Path
//! ```text
//! save("cart", raw)
//!   │
//!   ├─► write  <data_dir>/.cart.json.tmp
//!   │
//!   └─► rename .cart.json.tmp → cart.json   (atomic on the same filesystem)
//! ```
//!
//! A crash mid-write leaves the previous `cart.json` intact; a stray temp
//! file is overwritten by the next save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::adapter::{validate_key, DurableStore};
use crate::error::{StoreError, StoreResult};

/// Adapter backed by a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(dir.display().to_string(), e))?;

        debug!(dir = %dir.display(), "Opened file store");
        Ok(FileStore { dir })
    }

    /// Directory holding the snapshot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{key}.json.tmp"))
    }
}

impl DurableStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        if validate_key(key).is_err() {
            warn!(key, "Refusing to load invalid key");
            return None;
        }

        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(key, "No snapshot on disk");
                None
            }
            Err(e) => {
                warn!(key, path = %path.display(), error = %e, "Snapshot unreadable, treating as absent");
                None
            }
        }
    }

    fn save(&self, key: &str, raw: &str) -> StoreResult<()> {
        validate_key(key)?;

        let temp = self.temp_path_for(key);
        fs::write(&temp, raw).map_err(|e| StoreError::io(key, e))?;
        fs::rename(&temp, self.path_for(key)).map_err(|e| StoreError::io(key, e))?;

        debug!(key, bytes = raw.len(), "Snapshot written");
        Ok(())
    }

    fn clear(&self, key: &str) -> StoreResult<()> {
        validate_key(key)?;

        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {
                debug!(key, "Snapshot removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }
}
