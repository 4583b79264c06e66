use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

use crate::model::task::Task;

/// Key holding the serialized task list.
pub const TASKS_KEY: &str = "todos";
/// Key holding the dark-theme flag as the string "true" or "false".
pub const THEME_KEY: &str = "darkTheme";

/// Error type for persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("could not parse persisted tasks: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A byte-valued key-value store. Keys are flat names; values are opaque
/// byte strings. `read` distinguishes "absent" from an I/O failure.
pub trait Kv {
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>>;
    fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()>;
}

/// File-per-key store rooted at the data directory.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open (and create if needed) a store at the given directory.
    pub fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(DirStore { root })
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Kv for DirStore {
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.key_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        atomic_write(&self.key_path(key), bytes)
    }
}

/// In-memory store for tests and headless callers.
#[derive(Default)]
pub struct MemStore {
    entries: Mutex<std::collections::HashMap<String, Vec<u8>>>,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore::default()
    }
}

impl Kv for MemStore {
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Typed adapters over the raw keys
// ---------------------------------------------------------------------------

/// Load the persisted task list. `Ok(None)` means nothing was persisted yet;
/// a parse failure is an error the caller handles by falling back to the
/// seed list.
pub fn load_tasks(kv: &dyn Kv) -> Result<Option<Vec<Task>>, StorageError> {
    match kv.read(TASKS_KEY)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

pub fn save_tasks(kv: &dyn Kv, tasks: &[Task]) -> Result<(), StorageError> {
    let bytes = serde_json::to_vec(tasks)?;
    kv.write(TASKS_KEY, &bytes)?;
    Ok(())
}

/// Load the dark-theme flag. Only the exact bytes `"true"` enable it;
/// absent or unparseable values mean light mode.
pub fn load_theme(kv: &dyn Kv) -> bool {
    matches!(kv.read(THEME_KEY), Ok(Some(bytes)) if bytes == b"true")
}

pub fn save_theme(kv: &dyn Kv, dark: bool) -> Result<(), StorageError> {
    let value = if dark { "true" } else { "false" };
    kv.write(THEME_KEY, value.as_bytes())?;
    Ok(())
}

/// Resolve the data directory: an explicit override, or the platform
/// per-user data location.
pub fn resolve_data_dir(explicit: Option<&str>) -> io::Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(PathBuf::from(dir));
    }
    directories::ProjectDirs::from("", "", "tick")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| io::Error::other("could not determine a data directory"))
}

/// Load the persisted task list into a store, falling back to the seed list
/// when nothing was persisted or the persisted bytes fail to parse. Parse
/// failures go to the error log, not the user.
pub fn load_or_seed(kv: &dyn Kv, data_dir: &Path) -> crate::store::Store {
    use crate::store::Store;
    match load_tasks(kv) {
        Ok(Some(tasks)) => Store::new(tasks),
        Ok(None) => Store::seeded(),
        Err(e) => {
            crate::io::log::log_error(data_dir, "load todos", &e.to_string());
            Store::seeded()
        }
    }
}
