//! Persistence slots: string-keyed, string-valued storage that outlives the
//! process. The link store is the only writer of its key.

use crate::error::StoreError;
use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

/// Raw key-value I/O. Implementations handle the "where", the store handles
/// the "what".
pub trait KeyValueSlot: Send {
    /// Ok(None) when nothing has been stored under `key` yet.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace whatever is stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ── In-memory ──────────────────────────────────────────────────────────────

/// Process-local slot. Clones share the same contents, so a test can keep a
/// handle and inspect what the store wrote.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    inner: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail, for exercising save-error paths.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn map(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected("simulated write error".into()));
        }
        self.map().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// ── Directory-backed ───────────────────────────────────────────────────────

/// One `<key>.json` file per key inside `dir`. Writes go through a temp file
/// and a rename so a reader never sees half a collection.
#[derive(Clone, Debug)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueSlot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let target = self.path_for(key);
        let tmp = target.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &target)?;
        tracing::debug!("wrote slot {} ({} bytes)", target.display(), value.len());
        Ok(())
    }
}
