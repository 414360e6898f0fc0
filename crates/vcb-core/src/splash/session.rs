//! Session-scoped key/value storage for one-time UI sequences.
//!
//! A desktop "session" is the user's login: the file store lives in the
//! per-login runtime directory, which the platform clears at logout.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::SessionStoreError;

/// Key of the "intro already seen" flag.
pub const INTRO_SEEN_KEY: &str = "4sl_intro_seen";

/// Directory created under the runtime dir.
const APP_DIR: &str = "vc-brief";
const SESSION_FILE: &str = "session.json";

pub trait SessionStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError>;
    fn remove(&mut self, key: &str) -> Result<(), SessionStoreError>;
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionStoreError> {
        (**self).remove(key)
    }
}

/// Process-lifetime store. Used in tests and when no runtime dir exists.
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    values: BTreeMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already carries `key = value`.
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionStoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// JSON object on disk, rewritten on every change.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileSessionStore {
    /// Opens `path`, treating a missing file as an empty session.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionStoreError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).map_err(|source| {
                SessionStoreError::Corrupt {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(SessionStoreError::Io {
                    operation: "read",
                    path,
                    source,
                });
            }
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SessionStoreError::Io {
                operation: "create directory for",
                path: self.path.clone(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(&self.values).map_err(|source| {
            SessionStoreError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, json).map_err(|source| SessionStoreError::Io {
            operation: "write",
            path: self.path.clone(),
            source,
        })
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionStoreError> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// Location of the session file, if the platform has a runtime directory.
pub fn session_file_path() -> Option<PathBuf> {
    BaseDirs::new()
        .and_then(|dirs| dirs.runtime_dir().map(Path::to_path_buf))
        .map(|dir| dir.join(APP_DIR).join(SESSION_FILE))
}

/// The store for this login session, or memory when none is available.
pub fn desktop_session_store() -> Box<dyn SessionStore> {
    let Some(path) = session_file_path() else {
        tracing::debug!("No runtime directory; intro flag kept in memory");
        return Box::new(MemorySessionStore::new());
    };
    match FileSessionStore::open(&path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!(error = %err, "Session file unusable; intro flag kept in memory");
            Box::new(MemorySessionStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemorySessionStore::new();
        assert_eq!(store.get(INTRO_SEEN_KEY), None);
        store.set(INTRO_SEEN_KEY, "true").unwrap();
        assert_eq!(store.get(INTRO_SEEN_KEY).as_deref(), Some("true"));
        store.remove(INTRO_SEEN_KEY).unwrap();
        assert_eq!(store.get(INTRO_SEEN_KEY), None);
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SESSION_FILE);

        let mut store = FileSessionStore::open(&path).unwrap();
        store.set(INTRO_SEEN_KEY, "true").unwrap();

        let reopened = FileSessionStore::open(&path).unwrap();
        assert_eq!(reopened.get(INTRO_SEEN_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            FileSessionStore::open(&path),
            Err(SessionStoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn removing_absent_key_does_not_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);
        let mut store = FileSessionStore::open(&path).unwrap();
        store.remove(INTRO_SEEN_KEY).unwrap();
        assert!(!path.exists());
    }
}
